//! Boundary value accepted by the evaluator.
//!
//! Callers may hand over anything; only text takes part in scoring.

use secrecy::{ExposeSecret, SecretString};
use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Returns early from `from_any` when `$value` is one of the listed text
/// types, or an `Option` of one.
macro_rules! downcast_text {
    ($value:expr, $($ty:ty => $as_str:expr),* $(,)?) => {
        $(
            let as_str: for<'a> fn(&'a $ty) -> &'a str = $as_str;
            if let Some(s) = $value.downcast_ref::<$ty>() {
                return as_str(s).into();
            }
            if let Some(s) = $value.downcast_ref::<Option<$ty>>() {
                return s.as_ref().map(as_str).into();
            }
        )*
    };
}

/// A candidate password as received at the boundary.
#[derive(Debug)]
pub enum PasswordInput {
    /// A textual value. May be empty.
    Text(SecretString),
    /// Any non-textual value.
    Other,
}

impl PasswordInput {
    /// Classifies a type-erased value by its runtime type.
    ///
    /// `String`, `&'static str`, `Box<str>`, `Arc<str>`, `Rc<str>`,
    /// `Cow<'static, str>`, `Arc<String>` and `SecretString` are textual, as
    /// is `Option` of any of those when it is `Some`. Everything else is
    /// [`PasswordInput::Other`].
    pub fn from_any(value: &dyn Any) -> Self {
        downcast_text!(value,
            String => |s| &**s,
            &'static str => |s| &**s,
            Box<str> => |s| &**s,
            Arc<str> => |s| &**s,
            Rc<str> => |s| &**s,
            Cow<'static, str> => |s| &**s,
            Arc<String> => |s| &***s,
            SecretString => |s| s.expose_secret(),
        );
        PasswordInput::Other
    }

    /// Returns the password text when it is eligible for scoring:
    /// textual and non-empty.
    pub fn text(&self) -> Option<&str> {
        match self {
            PasswordInput::Text(secret) => {
                let text = secret.expose_secret();
                (!text.is_empty()).then_some(text)
            }
            PasswordInput::Other => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, PasswordInput::Text(_))
    }
}

impl From<&str> for PasswordInput {
    fn from(value: &str) -> Self {
        PasswordInput::Text(SecretString::new(value.into()))
    }
}

impl From<String> for PasswordInput {
    fn from(value: String) -> Self {
        PasswordInput::Text(SecretString::new(value.into()))
    }
}

impl From<&String> for PasswordInput {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

impl From<Box<str>> for PasswordInput {
    fn from(value: Box<str>) -> Self {
        PasswordInput::Text(SecretString::new(value))
    }
}

impl From<Arc<str>> for PasswordInput {
    fn from(value: Arc<str>) -> Self {
        (&*value).into()
    }
}

impl From<Rc<str>> for PasswordInput {
    fn from(value: Rc<str>) -> Self {
        (&*value).into()
    }
}

impl From<Arc<String>> for PasswordInput {
    fn from(value: Arc<String>) -> Self {
        value.as_str().into()
    }
}

impl From<Cow<'_, str>> for PasswordInput {
    fn from(value: Cow<'_, str>) -> Self {
        value.into_owned().into()
    }
}

impl From<SecretString> for PasswordInput {
    fn from(value: SecretString) -> Self {
        PasswordInput::Text(value)
    }
}

impl From<&SecretString> for PasswordInput {
    fn from(value: &SecretString) -> Self {
        value.expose_secret().into()
    }
}

impl<T: Into<PasswordInput>> From<Option<T>> for PasswordInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(PasswordInput::Other, Into::into)
    }
}

impl<T> From<Vec<T>> for PasswordInput {
    fn from(_: Vec<T>) -> Self {
        PasswordInput::Other
    }
}

macro_rules! non_textual {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PasswordInput {
                fn from(_: $ty) -> Self {
                    PasswordInput::Other
                }
            }
        )*
    };
}

non_textual!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
