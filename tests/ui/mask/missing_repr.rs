#[derive(enummask::Bitmask)]
enum A {
    B = 1
}

fn main() {}
