//! Flat expression tree.
//!
//! Nodes live in an [`ExprArena`] and refer to each other by [`ExprId`].
//! Array elements and call arguments are stored as [`ExprRange`]s into a
//! shared list so a node never owns a `Vec` of children.

use std::fmt;

/// Byte range in the expression text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Index into [`ExprArena`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Contiguous run of ids in the arena's expression list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExprRange {
    start: u32,
    len: u32,
}

impl ExprRange {
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Binary operators, lowest precedence last.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Pow,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    CaseEq,
    CaseNotEq,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Pow => "**",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::CaseEq => "===",
            BinaryOp::CaseNotEq => "!==",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Operators whose result is always `1` or `0`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt
                | BinaryOp::LtEq
                | BinaryOp::Gt
                | BinaryOp::GtEq
                | BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::CaseEq
                | BinaryOp::CaseNotEq
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `+`
    Plus,
    /// `~`
    BitNot,
    /// `!`
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::BitNot => "~",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Built-in `$` functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SystemFunction {
    /// `$clog2(x)`: ceiling of log2.
    Clog2,
    /// `$pow(base, exponent)`.
    Pow,
    /// `$sqrt(x)`.
    Sqrt,
    /// `$exp(x)`: e raised to `x`.
    Exp,
}

impl SystemFunction {
    /// Look up a function by its name including the `$`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "$clog2" => Some(SystemFunction::Clog2),
            "$pow" => Some(SystemFunction::Pow),
            "$sqrt" => Some(SystemFunction::Sqrt),
            "$exp" => Some(SystemFunction::Exp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SystemFunction::Clog2 => "$clog2",
            SystemFunction::Pow => "$pow",
            SystemFunction::Sqrt => "$sqrt",
            SystemFunction::Exp => "$exp",
        }
    }

    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            SystemFunction::Pow => 2,
            SystemFunction::Clog2 | SystemFunction::Sqrt | SystemFunction::Exp => 1,
        }
    }
}

impl fmt::Display for SystemFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Integer literal with the radix it was written in.
    Int { value: i128, radix: u32 },
    /// Fixed-point literal.
    Real { value: f64, precision: u32 },
    /// `true` / `false`.
    Bool(bool),
    /// String literal contents, without the quotes.
    Str(String),
    /// Symbol reference.
    Ident(String),
    /// `{a, b, ...}`
    Array(ExprRange),
    /// `$name(args)`
    Call {
        func: SystemFunction,
        args: ExprRange,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `cond ? then_expr : else_expr`
    Ternary {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Storage for every node of one parsed expression.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)] // expressions are far below u32::MAX nodes
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len() as u32;
        self.expr_lists.extend(ids);
        let len = self.expr_lists.len() as u32 - start;
        ExprRange { start, len }
    }

    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// All nodes in allocation order (children before parents).
    pub fn iter(&self) -> impl Iterator<Item = &Expr> {
        self.exprs.iter()
    }
}
