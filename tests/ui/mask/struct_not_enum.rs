#[derive(enummask::Bitmask)]
struct A(u8);

fn main() {}
