use std::{fmt, rc::Rc};

/// An abstract syntax tree (AST) node representing one parsed input line.
///
/// `Expr` is a closed set: every construct the grammar can produce has exactly
/// one variant, and both evaluation and printing match on it exhaustively.
/// Nodes own their children, so a tree is never shared. The single exception
/// is [`Expr::Function`], whose definition lives behind an [`Rc`] so that the
/// environment can keep it alive after the line that declared it is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3`, `0.5` or `1.2e-3`.
    Literal {
        /// The parsed value of the literal.
        value:  f64,
        /// The literal exactly as written in the source.
        lexeme: String,
    },
    /// A prefix or postfix operator applied to one operand.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A parenthesized expression.
    Group {
        /// The expression between the parentheses.
        inner: Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// `name = value`, binding a number in the innermost scope.
    Assignment {
        /// The name being bound.
        target: String,
        /// The value expression.
        value:  Box<Self>,
    },
    /// `name(params) = body`, declaring a user function.
    Function(Rc<FunctionDef>),
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
}

/// Represents a user-defined function definition.
///
/// A function binds an ordered list of parameter names to a single expression
/// body. Definitions are immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names (e.g. `x`).
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating point remainder (`mod`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `+`, the identity.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Postfix percent (e.g. `50%`), dividing the operand by 100.
    Percent,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Percent => "%",
        };
        write!(f, "{operator}")
    }
}

/// Prints an expression as a fully bracketed debugging form.
///
/// The output is not meant to be parsed back; it only has to be stable, so
/// printing the same tree twice always yields the same text.
///
/// # Example
/// ```
/// use terracalc::interpreter::parser::core::parse;
///
/// let expr = parse("2 + 3 * x").unwrap().unwrap();
/// assert_eq!(expr.to_string(), "(b[+]: 2, (b[*]: 3, (var: x)))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { lexeme, .. } => write!(f, "{lexeme}"),
            Self::Unary { op, operand } => write!(f, "(u[{op}]: {operand})"),
            Self::Binary { .. } => {
                let mut steps = Vec::new();
                let mut leftmost = self;
                while let Self::Binary { left, op, right } = leftmost {
                    steps.push((op, right));
                    leftmost = left.as_ref();
                }
                for (op, _) in &steps {
                    write!(f, "(b[{op}]: ")?;
                }
                write!(f, "{leftmost}")?;
                for (_, right) in steps.iter().rev() {
                    write!(f, ", {right})")?;
                }
                Ok(())
            },
            Self::Group { inner } => write!(f, "({inner})"),
            Self::Variable { name } => write!(f, "(var: {name})"),
            Self::Assignment { target, value } => write!(f, "{target} <- {value}"),
            Self::Function(def) => write!(f, "{def}"),
            Self::Call { name, arguments } => {
                write!(f, "(call {name}(")?;
                write_separated(f, arguments)?;
                write!(f, "))")
            },
        }
    }
}

/// Frees a tree without recursing through it.
///
/// Long `+ - * / mod` chains nest one level per operator on the left.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Moves every direct child into `out`, leaving empty leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Unary { operand: child, .. }
            | Self::Group { inner: child }
            | Self::Assignment { value: child, .. } => out.push(take_child(child)),
            Self::Binary { left, right, .. } => {
                out.push(take_child(left));
                out.push(take_child(right));
            },
            Self::Call { arguments, .. } => out.append(arguments),
            Self::Literal { .. } | Self::Variable { .. } | Self::Function(_) => {},
        }
    }
}

fn take_child(slot: &mut Box<Expr>) -> Expr {
    std::mem::replace(slot.as_mut(), Expr::Variable { name: String::new() })
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_separated(f, &self.params)?;
        write!(f, ") -> {}", self.body)
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
