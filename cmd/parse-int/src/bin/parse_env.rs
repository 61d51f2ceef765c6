//! parse-env: parse an environment variable and exit with its value.
//!
//! ```text
//! N=7 parse-env N     -> prints "Success parsed N=7", exit 7
//! N=7x parse-env N    -> stderr "ERR: InvalidChar", exit 1
//! parse-env UNSET     -> stderr "ERR: InvalidArgs", exit 1
//! ```

use ferror::{guard, kdebug, propagate, wrap_main, FResult};

use ferror_parse_int::parse::{err_to_string, parse_int, ArgsError};

wrap_main!(envp actual_main, err_to_string());

fn actual_main(args: &[String], vars: &[(String, String)]) -> FResult<i32> {
    guard!(args.len() == 2, ArgsError::InvalidArgs);

    let name = &args[1];
    let value = vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str());
    kdebug!("{} = {:?}", name, value);

    let value = match value {
        Some(v) => v,
        None => return Err(ArgsError::InvalidArgs.into()),
    };
    let n = propagate!(parse_int(value));
    println!("Success parsed {}={}", name, n);
    Ok(n)
}
