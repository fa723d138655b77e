use palisade_lib::DocumentParser;
use palisade_lib::diagnostics::DiagnosticsPrinter;
use palisade_lib::parser::CstPrinter;

use super::InputArgs;

pub struct CstArgs {
    pub input: InputArgs,
    pub trivia: bool,
    pub spans: bool,
}

pub fn run(args: CstArgs) -> i32 {
    let Some(source) = args.input.load() else {
        return 1;
    };

    match DocumentParser::new(args.input.limits).parse(&source) {
        Ok(doc) => {
            let printer = CstPrinter::new()
                .with_trivia(args.trivia)
                .with_spans(args.spans);
            print!("{}", printer.dump(&doc.syntax()));
            0
        }
        Err(err) => {
            let printer = DiagnosticsPrinter::new(&source).colored(args.input.color);
            eprint!("{}", printer.render_error(&err));
            1
        }
    }
}
