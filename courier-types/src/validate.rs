//! The [`Validate`] trait, the [`ValidationErrors`] accumulator, and the
//! reusable field rules built on top of it.
//!
//! Validation never fails fast: every rule runs and every violation lands in
//! the same [`ValidationErrors`], so a single [`Validate::validate`] call
//! reports everything wrong with a request at once.

use std::fmt;

// ─── Violation ───────────────────────────────────────────────────────────────

/// A single field-level rule violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Wire field name, with a dotted/indexed prefix for nested values
    /// (e.g. `prices[2].label`).
    pub field: String,
    /// Human-readable description of the broken rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ─── ValidationErrors ────────────────────────────────────────────────────────

/// An ordered collection of [`Violation`]s, grown as rules run.
///
/// Doubles as the error type: [`ValidationErrors::into_result`] converts a
/// non-empty collection into `Err(self)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failure(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "; {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    /// An empty collection, ready to accumulate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation { field: field.into(), message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterate over the accumulated violations in rule order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// `Ok(())` if nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// ─── Field rules ─────────────────────────────────────────────────────────────

impl ValidationErrors {
    /// Identifier-like strings must contain at least one non-whitespace char.
    pub fn non_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        }
    }

    /// Character count must fall in `min..=max`.
    pub fn char_bounds(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let n = value.chars().count();
        if n < min || n > max {
            self.push(field, format!("must be {min}-{max} characters, got {n}"));
        }
    }

    /// UTF-8 encoded byte length must fall in `min..=max`.
    ///
    /// Byte length, not character count: limits like the 128-byte invoice
    /// payload apply to the encoded form, so multi-byte text hits the cap
    /// sooner than its character count suggests.
    pub fn byte_bounds(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let n = value.len();
        if n < min || n > max {
            self.push(field, format!("must be {min}-{max} bytes, got {n}"));
        }
    }

    /// UTF-8 encoded byte length must not exceed `max` (empty is fine).
    pub fn max_bytes(&mut self, field: &str, value: &str, max: usize) {
        let n = value.len();
        if n > max {
            self.push(field, format!("must be at most {max} bytes, got {n}"));
        }
    }

    /// Integer identifiers must be at least `min`.
    ///
    /// Channel and supergroup ids are negative and fail the usual `min = 1`
    /// check; that matches the documented limitation of the integer branch
    /// (address channels through their `@username` instead).
    pub fn at_least(&mut self, field: &str, value: i64, min: i64) {
        if value < min {
            self.push(field, format!("must be at least {min}, got {value}"));
        }
    }

    /// Collection length must fall in `min..=max`.
    pub fn list_bounds(&mut self, field: &str, len: usize, min: usize, max: usize) {
        if len < min || len > max {
            self.push(field, format!("must have {min}-{max} entries, got {len}"));
        }
    }

    /// At most one of two alternative fields may be set.
    pub fn mutually_exclusive(&mut self, a: &str, b: &str, a_set: bool, b_set: bool) {
        if a_set && b_set {
            self.push(a, format!("cannot be combined with {b}"));
        }
    }

    /// Sticker set names: 1-64 characters, start with a letter, then letters,
    /// digits and underscores only, and no consecutive underscores.
    pub fn sticker_set_name(&mut self, field: &str, name: &str) {
        self.char_bounds(field, name, 1, 64);
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            Some(_) => self.push(field, "must start with a letter"),
            None => return, // already reported by char_bounds
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.push(field, "may only contain letters, digits and underscores");
        }
        if name.contains("__") {
            self.push(field, "must not contain consecutive underscores");
        }
    }

    /// Suggested tip amounts: at most 4, all non-negative, strictly
    /// increasing, and none above `max_tip` when a ceiling is set.
    pub fn tip_amounts(&mut self, field: &str, tips: &[i64], max_tip: Option<i64>) {
        if tips.len() > 4 {
            self.push(field, format!("must have at most 4 entries, got {}", tips.len()));
        }
        if tips.iter().any(|&t| t < 0) {
            self.push(field, "amounts must be non-negative");
        }
        if tips.windows(2).any(|w| w[0] >= w[1]) {
            self.push(field, "amounts must be strictly increasing");
        }
        if let Some(max) = max_tip {
            if tips.iter().any(|&t| t > max) {
                self.push(field, format!("amounts must not exceed max_tip_amount ({max})"));
            }
        }
    }
}

// ─── Nested delegation ───────────────────────────────────────────────────────

impl ValidationErrors {
    /// Run a nested value's checks, prefixing its violations with `field.`.
    pub fn nested(&mut self, field: &str, value: &impl Validate) {
        let mut inner = ValidationErrors::new();
        value.check(&mut inner);
        for v in inner.violations {
            self.push(format!("{field}.{}", v.field), v.message);
        }
    }

    /// Run checks for each element, prefixing violations with `field[i].`.
    pub fn nested_each<T: Validate>(&mut self, field: &str, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            let mut inner = ValidationErrors::new();
            item.check(&mut inner);
            for v in inner.violations {
                self.push(format!("{field}[{i}].{}", v.field), v.message);
            }
        }
    }
}

// ─── Validate ────────────────────────────────────────────────────────────────

/// A value that can check itself against the Bot API's documented rules.
///
/// Implementors append violations to the shared collection in [`check`];
/// nothing short-circuits, so callers see every problem in one pass.
///
/// [`check`]: Validate::check
pub trait Validate {
    /// Append any rule violations for `self` to `errors`.
    fn check(&self, errors: &mut ValidationErrors);

    /// Run [`check`](Validate::check) on a fresh collection and convert it
    /// to a `Result`.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check(&mut errors);
        errors.into_result()
    }
}
