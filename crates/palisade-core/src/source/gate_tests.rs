use super::{BoundedCharGate, CharSource, ReadError, SourceAggregate, drain};

/// Records the largest request the gate forwards.
struct RequestRecorder<'a> {
    inner: super::AggregateReader<'a>,
    largest_request: usize,
    delivered: usize,
}

impl CharSource for RequestRecorder<'_> {
    fn read(&mut self, buf: &mut String, max_chars: usize) -> Result<usize, ReadError> {
        self.largest_request = self.largest_request.max(max_chars);
        let n = self.inner.read(buf, max_chars)?;
        self.delivered += n;
        Ok(n)
    }

    fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }
}

fn drain_with_ceiling(text: &str, ceiling: u32) -> Result<String, ReadError> {
    let aggregate = SourceAggregate::one_liner(text).unwrap();
    drain(BoundedCharGate::new(aggregate.reader(), ceiling))
}

#[test]
fn below_ceiling_passes() {
    let text = "a".repeat(99);
    assert_eq!(drain_with_ceiling(&text, 100).unwrap(), text);
}

#[test]
fn exactly_at_ceiling_passes() {
    let text = "a".repeat(100);
    assert_eq!(drain_with_ceiling(&text, 100).unwrap(), text);
}

#[test]
fn one_past_ceiling_fails() {
    let text = "a".repeat(101);
    assert_eq!(
        drain_with_ceiling(&text, 100),
        Err(ReadError::CharacterLimitExceeded { ceiling: 100 })
    );
}

#[test]
fn ceiling_counts_characters() {
    let text = "é".repeat(10);
    assert!(drain_with_ceiling(&text, 10).is_ok());
    assert!(drain_with_ceiling(&text, 9).is_err());
}

#[test]
fn delegate_never_emits_more_than_ceiling() {
    let text = "x".repeat(10_000);
    let aggregate = SourceAggregate::one_liner(&text).unwrap();
    let mut recorder = RequestRecorder {
        inner: aggregate.reader(),
        largest_request: 0,
        delivered: 0,
    };

    let result = drain(BoundedCharGate::new(&mut recorder, 5000));
    assert!(result.is_err());
    assert_eq!(recorder.delivered, 5000);
    assert!(recorder.largest_request <= 5000);
}

#[test]
fn read_is_clamped_to_remaining_budget() {
    let aggregate = SourceAggregate::one_liner("abcdef").unwrap();
    let mut gate = BoundedCharGate::new(aggregate.reader(), 4);
    let mut buf = String::new();
    assert_eq!(gate.read(&mut buf, 3).unwrap(), 3);
    assert_eq!(gate.read(&mut buf, 3).unwrap(), 1);
    assert_eq!(buf, "abcd");
    assert_eq!(gate.consumed(), 4);
    assert_eq!(
        gate.read(&mut buf, 3),
        Err(ReadError::CharacterLimitExceeded { ceiling: 4 })
    );
    assert_eq!(buf, "abcd");
}

#[test]
fn error_message_names_ceiling() {
    let err = ReadError::CharacterLimitExceeded { ceiling: 1048576 };
    assert_eq!(
        err.to_string(),
        "More than 1048576 characters have been presented. To prevent Denial Of Service attacks, parsing has been cancelled."
    );
}
