use palisade_core::{SourceAggregate, SourceSpan};
use rowan::TextRange;
use serde::Serialize;

/// Ordinary validation findings.
///
/// The node-count abort is not here: it is an [`Error`](crate::Error) and ends
/// the traversal instead of being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ValidationErrorKind {
    LoneAnonymousOperation,
    DuplicateOperationName,
    UndefinedFragment,
    UnusedFragment,
    FragmentCycle,
    UndefinedVariable,
    UnusedVariable,

    /// Appended once when the collector is full.
    MaxValidationErrorsReached,
}

impl ValidationErrorKind {
    /// Base message, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::LoneAnonymousOperation => {
                "an anonymous operation must be the only defined operation"
            }
            Self::DuplicateOperationName => "operation names must be unique",
            Self::UndefinedFragment => "undefined fragment",
            Self::UnusedFragment => "unused fragment",
            Self::FragmentCycle => "fragment spreads must not form cycles",
            Self::UndefinedVariable => "undefined variable",
            Self::UnusedVariable => "unused variable",
            Self::MaxValidationErrorsReached => {
                "the maximum number of validation errors has been reached"
            }
        }
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::LoneAnonymousOperation => Some("give every operation a name"),
            Self::UnusedVariable => Some("remove it from the variable definitions"),
            _ => None,
        }
    }
}

/// One finding, located by its range in the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    #[serde(skip)]
    range: TextRange,
    message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_owned(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Resolves the start of the range against the aggregate that was parsed.
    pub fn locate(&self, source: &SourceAggregate) -> Option<SourceSpan> {
        source.locate(self.range.start().into())
    }
}

/// Collector with a ceiling on the number of findings.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
    #[serde(skip)]
    max_errors: usize,
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ERRORS)
    }
}

impl ValidationErrors {
    pub const DEFAULT_MAX_ERRORS: usize = 100;

    pub fn new(max_errors: usize) -> Self {
        Self {
            errors: Vec::new(),
            max_errors,
        }
    }

    /// Records `error` unless the ceiling was reached. The first dropped error
    /// is replaced by a single `MaxValidationErrorsReached`.
    pub fn push(&mut self, error: ValidationError) {
        if self.errors.len() < self.max_errors {
            self.errors.push(error);
        } else if !self.is_full() {
            let marker =
                ValidationError::new(ValidationErrorKind::MaxValidationErrorsReached, error.range);
            self.errors.push(marker);
        }
    }

    /// Whether further findings are dropped.
    pub fn is_full(&self) -> bool {
        self.errors
            .last()
            .is_some_and(|e| e.kind == ValidationErrorKind::MaxValidationErrorsReached)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Findings in document order.
    pub fn sorted(mut self) -> Self {
        let marker = self.is_full().then(|| self.errors.pop()).flatten();
        self.errors.sort_by_key(|e| (e.range.start(), e.kind));
        self.errors.extend(marker);
        self
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
