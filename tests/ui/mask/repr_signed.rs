#[derive(enummask::Bitmask)]
#[repr(i32)]
enum A {
    B = 1
}

fn main() {}
