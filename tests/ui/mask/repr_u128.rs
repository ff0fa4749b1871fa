#[derive(enummask::Bitmask)]
#[repr(u128)]
enum A {
    B = 1
}

fn main() {}
