use palisade_lib::DocumentParser;
use palisade_lib::diagnostics::DiagnosticsPrinter;
use palisade_lib::parser::{EventRecorder, RecordedEvent};

use super::InputArgs;

pub struct EventsArgs {
    pub input: InputArgs,
}

/// Prints events indented by rule depth. On failure the events seen so far
/// are printed before the error.
pub fn run(args: EventsArgs) -> i32 {
    let Some(source) = args.input.load() else {
        return 1;
    };

    let mut recorder = EventRecorder::new();
    let result =
        DocumentParser::new(args.input.limits).parse_with_listener(&source, &mut recorder);

    let mut depth = 0usize;
    for event in recorder.events() {
        if matches!(event, RecordedEvent::RuleExit { .. }) {
            depth = depth.saturating_sub(1);
        }
        println!("{}{}", "  ".repeat(depth), event);
        if matches!(event, RecordedEvent::RuleEnter { .. }) {
            depth += 1;
        }
    }

    match result {
        Ok(_) => 0,
        Err(err) => {
            let printer = DiagnosticsPrinter::new(&source).colored(args.input.color);
            eprint!("{}", printer.render_error(&err));
            1
        }
    }
}
