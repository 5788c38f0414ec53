//! Verification context: turns an unmet condition into a reported failure.
//!
//! Assertions hand a condition, an optional reason and a message template to
//! [`Verification`]. When the condition does not hold, the message is
//! formatted and surfaced: recorded in the innermost [`AssertionScope`] of
//! the current thread if one is active, otherwise raised as a panic.
//!
//! ## Templates
//!
//! - `{reason}` expands to the formatted reason (` because ...`) or nothing;
//! - `{0}`, `{1}`, ... expand to the positional arguments;
//! - `{{` and `}}` produce literal braces;
//! - anything else is copied verbatim.

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::rc::Rc;
use std::thread;

thread_local! {
    static SCOPES: RefCell<Vec<Rc<RefCell<Vec<String>>>>> = const { RefCell::new(Vec::new()) };
}

/// A single verification: condition, reason, then failure message.
///
/// ```
/// use assert_props::Verification;
///
/// let passed = Verification::begin()
///     .for_condition(1 + 1 == 2)
///     .because("arithmetic still works in {0}", &[&"tests"])
///     .fail_with("Expected 2{reason}, but found {0}", &[&3]);
/// assert!(passed);
/// ```
#[derive(Debug)]
#[must_use = "a verification does nothing until `fail_with` is called"]
pub struct Verification {
    succeeded: bool,
    reason: String,
}

impl Verification {
    pub fn begin() -> Self {
        Verification {
            succeeded: true,
            reason: String::new(),
        }
    }

    /// Sets the condition that must hold for the verification to pass.
    pub fn for_condition(mut self, condition: bool) -> Self {
        self.succeeded = condition;
        self
    }

    /// Sets the reason shown in the failure message through `{reason}`.
    ///
    /// `{0}`, `{1}`, ... in `reason` are replaced by `args`. The result is
    /// prefixed with "because" unless it already starts with it.
    pub fn because(mut self, reason: &str, args: &[&dyn Display]) -> Self {
        self.reason = format_reason(reason, args);
        self
    }

    /// Reports a failure with the formatted `template` if the condition does
    /// not hold. Returns whether the condition held.
    ///
    /// The message is only formatted on failure.
    pub fn fail_with(self, template: &str, args: &[&dyn Display]) -> bool {
        if !self.succeeded {
            let message = format_template(template, &self.reason, args);
            report_failure(message);
        }
        self.succeeded
    }
}

/// Collects assertion failures instead of panicking on the first one.
///
/// While a scope is alive, failures on the same thread are recorded in it.
/// When it is dropped with recorded failures, they are forwarded to the
/// enclosing scope, or reported together in one panic if there is none.
///
/// ```should_panic
/// use assert_props::{AssertionScope, PropertyAssertions, PropertyInfo, TypeInfo};
///
/// let person = PropertyAssertions::new(
///     TypeInfo::new("Person", "app"),
///     vec![PropertyInfo::new("age", "u32")],
/// );
///
/// let _scope = AssertionScope::new();
/// person.be_virtual();
/// person.not_be_writable();
/// // Both failures are reported here, when `_scope` is dropped.
/// ```
#[derive(Debug)]
pub struct AssertionScope {
    failures: Rc<RefCell<Vec<String>>>,
}

impl AssertionScope {
    /// Starts collecting failures on the current thread.
    pub fn new() -> Self {
        let failures = Rc::new(RefCell::new(Vec::new()));
        SCOPES.with(|scopes| scopes.borrow_mut().push(failures.clone()));
        AssertionScope { failures }
    }

    /// The failure messages recorded so far, oldest first.
    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.borrow().is_empty()
    }

    /// Removes and returns the recorded failures so they are not reported
    /// when the scope is dropped.
    pub fn discard(&self) -> Vec<String> {
        self.failures.take()
    }
}

impl Default for AssertionScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AssertionScope {
    fn drop(&mut self) {
        let failures = self.failures.take();

        // The enclosing scope is the one created just before this one, even
        // when newer scopes are still alive.
        let outer = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            let index = scopes
                .iter()
                .position(|scope| Rc::ptr_eq(scope, &self.failures))?;
            scopes.remove(index);
            index.checked_sub(1).map(|below| scopes[below].clone())
        });

        if failures.is_empty() {
            return;
        }

        match outer {
            Some(outer) => outer.borrow_mut().extend(failures),
            None if thread::panicking() => {}
            None => panic!("{}", FailureReport(&failures)),
        }
    }
}

fn report_failure(message: String) {
    let unhandled = SCOPES.with(|scopes| match scopes.borrow().last() {
        Some(scope) => {
            scope.borrow_mut().push(message);
            None
        }
        None => Some(message),
    });

    if let Some(message) = unhandled {
        panic!("{}", message);
    }
}

/// Renders the failures collected by a scope.
struct FailureReport<'a>(&'a [String]);

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [single] => f.write_str(single),
            failures => {
                write!(f, "{} assertion failures:", failures.len())?;
                for failure in failures {
                    write!(f, "\n\n{}", failure)?;
                }
                Ok(())
            }
        }
    }
}

/// Formats a reason for inclusion after the main clause of a message.
///
/// Returns an empty string for a blank reason, otherwise the substituted
/// reason preceded by a space and, if missing, the word "because".
pub(crate) fn format_reason(reason: &str, args: &[&dyn Display]) -> String {
    let reason = substitute(reason, |key| positional(key, args));
    let reason = reason.trim();

    if reason.is_empty() {
        String::new()
    } else if starts_with_because(reason) {
        format!(" {}", reason)
    } else {
        format!(" because {}", reason)
    }
}

pub(crate) fn format_template(template: &str, reason: &str, args: &[&dyn Display]) -> String {
    substitute(template, |key| match key {
        "reason" => Some(reason.to_string()),
        _ => positional(key, args),
    })
}

fn starts_with_because(reason: &str) -> bool {
    const BECAUSE: &str = "because";

    let Some(head) = reason.get(..BECAUSE.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(BECAUSE)
        && reason[BECAUSE.len()..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace)
}

fn positional(key: &str, args: &[&dyn Display]) -> Option<String> {
    let index: usize = key.parse().ok()?;
    args.get(index).map(|arg| arg.to_string())
}

// Single pass, so substituted values are never expanded again.
fn substitute(template: &str, mut lookup: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{").or_else(|| tail.strip_prefix("}}")) {
            out.push_str(&tail[..1]);
            rest = after;
            continue;
        }

        if let Some(inner) = tail.strip_prefix('{') {
            if let Some(end) = inner.find('}') {
                if let Some(value) = lookup(&inner[..end]) {
                    out.push_str(&value);
                    rest = &inner[end + 1..];
                    continue;
                }
            }
        }

        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reason_is_empty() {
        assert_eq!(format_reason("", &[]), "");
        assert_eq!(format_reason("   ", &[]), "");
    }

    #[test]
    fn reason_gets_because_prefix() {
        assert_eq!(
            format_reason("proxies need it", &[]),
            " because proxies need it"
        );
    }

    #[test]
    fn reason_already_starting_with_because() {
        assert_eq!(
            format_reason("  because proxies need it ", &[]),
            " because proxies need it"
        );
        assert_eq!(format_reason("Because we say so", &[]), " Because we say so");
        assert_eq!(format_reason("becauseless", &[]), " because becauseless");
    }

    #[test]
    fn reason_positional_arguments() {
        assert_eq!(
            format_reason("{0} needs {1} for {0}", &[&"orm", &2]),
            " because orm needs 2 for orm"
        );
    }

    #[test]
    fn template_escapes_and_unknown_keys() {
        assert_eq!(
            format_template("{{0}} {0} {2} {name} {reason}.", " because x", &[&"a"]),
            "{0} a {2} {name}  because x."
        );
    }

    #[test]
    fn substituted_values_are_not_expanded() {
        assert_eq!(format_template("{0}", "", &[&"{reason}"]), "{reason}");
    }

    #[test]
    fn unbalanced_braces_are_copied() {
        assert_eq!(format_template("a { b } c {", "", &[]), "a { b } c {");
    }

    #[test]
    fn passing_verification_does_not_report() {
        let scope = AssertionScope::new();
        let passed = Verification::begin()
            .for_condition(true)
            .fail_with("never shown", &[]);
        assert!(passed);
        assert!(!scope.has_failures());
    }

    #[test]
    fn failing_verification_is_recorded_in_scope() {
        let scope = AssertionScope::new();
        let passed = Verification::begin()
            .for_condition(false)
            .because("of {0}", &[&"reasons"])
            .fail_with("Expected {0}{reason}.", &[&"success"]);
        assert!(!passed);
        assert_eq!(scope.discard(), ["Expected success because of reasons."]);
        assert!(!scope.has_failures());
    }

    #[test]
    fn report_lists_every_failure() {
        let failures = vec!["first".to_string(), "second".to_string()];
        assert_eq!(
            FailureReport(&failures).to_string(),
            "2 assertion failures:\n\nfirst\n\nsecond"
        );
        assert_eq!(FailureReport(&failures[..1]).to_string(), "first");
    }
}
