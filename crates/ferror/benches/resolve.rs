//! Dispatcher lookup cost: how long `Group::resolve` takes to map a code
//! back to its name, for hits in the first and last family and for a miss.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ferror::{error_family, error_group, ErrorCode, Resolve};

error_family! {
    pub enum ArgsError { InvalidArgs }
}
error_family! {
    pub enum ParseIntError { InvalidChar, ArithmeticOverflow }
}
error_family! {
    pub enum ParseBoolError { InvalidChars }
}
error_family! {
    pub enum IoError { NotFound, PermissionDenied, BrokenPipe, TimedOut, UnexpectedEof }
}
error_family! {
    pub enum NetError { Refused, Reset, Aborted, Unreachable }
}

error_group!(fn all_errors = [ArgsError, ParseIntError, ParseBoolError, IoError, NetError];);

fn bench_resolve(c: &mut Criterion) {
    let group = all_errors();
    let first = ArgsError::InvalidArgs.code();
    let last = NetError::Unreachable.code();
    let miss = ErrorCode::new(i32::MAX);

    c.bench_function("group_resolve_first_family", |b| {
        b.iter(|| group.resolve(black_box(first)))
    });
    c.bench_function("group_resolve_last_family", |b| {
        b.iter(|| group.resolve(black_box(last)))
    });
    c.bench_function("group_resolve_miss", |b| {
        b.iter(|| group.resolve(black_box(miss)))
    });
    c.bench_function("family_name_of", |b| {
        let family = IoError::family();
        let code = IoError::TimedOut.code();
        b.iter(|| family.name_of(black_box(code)))
    });
    c.bench_function("member_code", |b| {
        b.iter(|| black_box(ParseIntError::ArithmeticOverflow).code())
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
