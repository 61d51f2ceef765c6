//! parse-int: parse one command-line argument and report failures by name.
//!
//! ```text
//! parse-int 123           -> prints "Success parsed int 123", exit 0
//! parse-int 12a           -> stderr "ERR: InvalidChar", exit 1
//! parse-int --bool true   -> prints "Success parsed bool true", exit 0
//! parse-int               -> stderr "ERR: InvalidArgs", exit 1
//! ```
//!
//! # Environment Variables
//!
//! - `FERROR_LOG_LEVEL=debug` - Show family registration as it happens

use ferror::{guard, kdebug, propagate, wrap_main, FResult};

use ferror_parse_int::parse::{err_to_string, parse_bool, parse_int, ArgsError};

wrap_main!(actual_main, err_to_string());

fn actual_main(args: &[String]) -> FResult<i32> {
    kdebug!("args: {:?}", args);

    if args.len() == 3 && args[1] == "--bool" {
        let value = propagate!(parse_bool(&args[2]));
        println!("Success parsed bool {}", value);
        return Ok(0);
    }

    guard!(args.len() == 2, ArgsError::InvalidArgs);
    let out = propagate!(parse_int(&args[1]));
    println!("Success parsed int {}", out);
    Ok(0)
}
