//! By-name dispatch of the operations over dynamic [`Value`]s.
//!
//! Every operation takes exactly one argument, a vector of integers or of
//! strings, and is registered under its camel-case name (`bookEndList`,
//! `makeMath`, ...).

use arraykit_foundation::{Error, ErrorContext, ErrorKind, Result, Type, Value};
use tracing::debug;

use crate::functional;

/// Operation callable by name.
#[derive(Clone)]
pub struct NativeFn {
    /// Registered name.
    pub name: &'static str,
    /// Function pointer.
    pub func: fn(&[Value]) -> Result<Value>,
}

impl NativeFn {
    /// Calls the operation, recording its name and a stack frame in any
    /// error context.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments have the wrong count or type.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        debug!(name = self.name, args = args.len(), "dispatching native operation");
        (self.func)(args).map_err(|mut err| {
            let context = err
                .context
                .take()
                .unwrap_or_default()
                .with_operation(self.name)
                .with_frame(self.name);
            err.with_context(context)
        })
    }
}

impl std::fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

static NATIVES: [NativeFn; 9] = [
    NativeFn {
        name: "bookEndList",
        func: native_book_end_list,
    },
    NativeFn {
        name: "tripleNumbers",
        func: native_triple_numbers,
    },
    NativeFn {
        name: "stringsToIntegers",
        func: native_strings_to_integers,
    },
    NativeFn {
        name: "removeDollars",
        func: native_remove_dollars,
    },
    NativeFn {
        name: "shoutIfExclaiming",
        func: native_shout_if_exclaiming,
    },
    NativeFn {
        name: "countShortWords",
        func: native_count_short_words,
    },
    NativeFn {
        name: "allRGB",
        func: native_all_rgb,
    },
    NativeFn {
        name: "makeMath",
        func: native_make_math,
    },
    NativeFn {
        name: "injectPositive",
        func: native_inject_positive,
    },
];

/// Returns every registered operation in registration order.
#[must_use]
pub fn natives() -> &'static [NativeFn] {
    &NATIVES
}

/// Iterates the registered names in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    NATIVES.iter().map(|f| f.name)
}

/// Finds an operation by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static NativeFn> {
    NATIVES.iter().find(|f| f.name == name)
}

/// Calls the operation registered under `name`.
///
/// # Errors
///
/// Returns [`ErrorKind::UnknownOperation`] for an unregistered name, and the
/// operation's own error for bad arguments.
pub fn call(name: &str, args: &[Value]) -> Result<Value> {
    match lookup(name) {
        Some(native) => native.call(args),
        None => {
            debug!(name, "unknown operation");
            Err(Error::unknown_operation(name))
        }
    }
}

// =============================================================================
// Argument extraction
// =============================================================================

/// Checks the single sequence argument against `vec<element>`.
///
/// Mixed and empty vectors report `vec<any>`, which `Type::accepts` lets
/// through, so elements are checked one by one to find the offending index.
fn typed_sequence<'a>(args: &'a [Value], element: &Type) -> Result<&'a [Value]> {
    let expected = Type::vec(element.clone());
    let [arg] = args else {
        return Err(Error::arity_mismatch(1, args.len()));
    };
    if !expected.accepts(&arg.value_type()) {
        return Err(Error::type_mismatch(expected, arg.value_type()));
    }
    let items = arg.as_vec().unwrap_or_default();
    match items.iter().position(|v| !element.accepts(&v.value_type())) {
        Some(index) => Err(Error::type_mismatch(element.clone(), items[index].value_type())
            .with_context(ErrorContext::new().with_index(index))),
        None => Ok(items),
    }
}

fn int_items(args: &[Value]) -> Result<Vec<i64>> {
    Ok(typed_sequence(args, &Type::Int)?
        .iter()
        .filter_map(Value::as_int)
        .collect())
}

fn str_items(args: &[Value]) -> Result<Vec<&str>> {
    Ok(typed_sequence(args, &Type::String)?
        .iter()
        .filter_map(Value::as_str)
        .collect())
}

// =============================================================================
// Operations
// =============================================================================

fn native_book_end_list(args: &[Value]) -> Result<Value> {
    Ok(functional::book_end_list(&int_items(args)?).into())
}

fn native_triple_numbers(args: &[Value]) -> Result<Value> {
    Ok(functional::triple_numbers(&int_items(args)?).into())
}

fn native_strings_to_integers(args: &[Value]) -> Result<Value> {
    Ok(functional::strings_to_integers(&str_items(args)?).into())
}

fn native_remove_dollars(args: &[Value]) -> Result<Value> {
    Ok(functional::remove_dollars(&str_items(args)?).into())
}

fn native_shout_if_exclaiming(args: &[Value]) -> Result<Value> {
    Ok(functional::shout_if_exclaiming(&str_items(args)?).into())
}

fn native_count_short_words(args: &[Value]) -> Result<Value> {
    let count = functional::count_short_words(&str_items(args)?);
    i64::try_from(count)
        .map(Value::Int)
        .map_err(|_| Error::new(ErrorKind::Internal(format!("count {count} exceeds i64"))))
}

fn native_all_rgb(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(functional::all_rgb(&str_items(args)?)))
}

fn native_make_math(args: &[Value]) -> Result<Value> {
    Ok(Value::from(functional::make_math(&int_items(args)?)))
}

fn native_inject_positive(args: &[Value]) -> Result<Value> {
    Ok(functional::inject_positive(&int_items(args)?).into())
}
