//! Bit-packing example: how bool arrays and bool scalars are laid out

use bepc::{ScalarKind, TypeTag, TypedBuffer};

fn main() -> bepc::Result<()> {
    let flags: Vec<bool> = (0..20).map(|i| i % 3 == 0).collect();
    let buffer = TypedBuffer::new(&flags)?;

    println!("{} flags packed into {} bytes", flags.len(), buffer.len());
    println!("count prefix: {:02x?}", &buffer.as_bytes()[..2]);
    println!("packed bits:  {:08b}", Bits(&buffer.as_bytes()[2..]));

    let decoded: Vec<bool> = buffer.get()?;
    assert_eq!(decoded, flags);

    // A scalar bool is a single byte with no prefix
    let single = TypedBuffer::new(&true)?;
    println!("scalar true:  {:02x?}", single.as_bytes());

    // Reading the packed buffer as raw bytes shows the same layout
    let raw = buffer.as_type(TypeTag::Array(ScalarKind::Int8))?;
    println!("as i8[]:      {raw:?}");

    Ok(())
}

struct Bits<'a>(&'a [u8]);

impl std::fmt::Binary for Bits<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            std::fmt::Binary::fmt(byte, f)?;
        }
        Ok(())
    }
}
