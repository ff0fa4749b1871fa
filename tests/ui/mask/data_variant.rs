#[derive(enummask::Bitmask)]
#[repr(u8)]
enum A {
    B(u8)
}

fn main() {}
