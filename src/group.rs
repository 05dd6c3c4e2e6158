/// Grouping of gocov functions into Cobertura "classes".
///
/// Go has no classes, so a class here is the set of functions in one source
/// file sharing a receiver type. Package-level functions go into the class
/// named `-`.
use std::collections::HashMap;

use crate::gocov::Function;

/// Class name used for functions without a receiver.
pub const PACKAGE_CLASS: &str = "-";

/// Split a qualified function name into `(class, method)`.
///
/// The name is prefixed with `-.` and split on `.`; the last two segments are
/// the class and method. Anything before them is dropped, so `A.B.C` yields
/// `("B", "C")` and a bare `F` yields `("-", "F")`.
#[must_use]
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((qualifier, method)) => {
            let class = qualifier.rsplit('.').next().unwrap_or(qualifier);
            (class, method)
        }
        None => (PACKAGE_CLASS, name),
    }
}

/// Functions that share a `(file, class)` key, in input order.
#[derive(Debug)]
pub struct ClassGroup<'a> {
    pub name: &'a str,
    pub filename: &'a str,
    /// Each function paired with its method name.
    pub functions: Vec<(&'a str, &'a Function)>,
}

/// Partition `functions` by `(file, class)`. Groups are returned in the
/// order their first function appears.
pub fn group_functions(functions: &[Function]) -> Vec<ClassGroup<'_>> {
    let mut groups: Vec<ClassGroup<'_>> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for function in functions {
        let (class, method) = split_name(&function.name);
        let slot = *index
            .entry((function.file.as_str(), class))
            .or_insert_with(|| {
                groups.push(ClassGroup {
                    name: class,
                    filename: &function.file,
                    functions: Vec::new(),
                });
                groups.len() - 1
            });
        groups[slot].functions.push((method, function));
    }

    groups
}
