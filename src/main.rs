use bytes::{BufMut, Bytes, BytesMut};
use catena::datum::Datum;
use catena::list::{List, RenderRecord};

/// Byte width of the label field inside a [`Part`] payload.
const LABEL_WIDTH: usize = 12;

/// Total encoded width of a [`Part`]: label plus a 32-bit quantity.
const PART_WIDTH: usize = LABEL_WIDTH + 4;

/// A client-side record the list stores opaquely: a NUL-padded label and a
/// little-endian quantity.
struct Part {
    label: &'static str,
    quantity: i32,
}

impl Part {
    fn encode(&self) -> Bytes {
        let mut label = [0u8; LABEL_WIDTH];
        let src = self.label.as_bytes();
        let len = src.len().min(LABEL_WIDTH);
        label[..len].copy_from_slice(&src[..len]);

        let mut buf = BytesMut::with_capacity(PART_WIDTH);
        buf.put_slice(&label);
        buf.put_i32_le(self.quantity);
        buf.freeze()
    }
}

/// Decodes a [`Part`] payload back into `[label],[quantity]` text.
struct PartRenderer;

impl RenderRecord for PartRenderer {
    fn render(&self, payload: &[u8]) -> String {
        let end = payload[..LABEL_WIDTH]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(LABEL_WIDTH);
        let label = String::from_utf8_lossy(&payload[..end]);
        let quantity = i32::from_le_bytes([
            payload[LABEL_WIDTH],
            payload[LABEL_WIDTH + 1],
            payload[LABEL_WIDTH + 2],
            payload[LABEL_WIDTH + 3],
        ]);
        format!("[{}],[{}]", label, quantity)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("catena: a generic doubly-linked list");

    let mut list = List::with_record_width(PART_WIDTH);
    let renderer = PartRenderer;

    // An empty list refuses to render.
    if let Err(err) = list.to_text(&renderer) {
        println!("show: {}", err);
    }

    list.push_back(Datum::Integer(100))?;
    list.push_front(Datum::Character('A'))?;
    list.insert_before(&Datum::Integer(100), Datum::from("saksham"))?;
    list.insert_after(&Datum::Character('A'), Datum::Double(9.81))?;

    println!("{}", list.to_text(&renderer)?);
    println!("length: {}", list.len());
    println!("front: {:?}", list.front()?);
    println!("back: {:?}", list.back()?);
    println!("after 'A': {:?}", list.after(&Datum::Character('A'))?);
    println!("before 100: {:?}", list.before(&Datum::Integer(100))?);

    let bolt = Part {
        label: "bolt",
        quantity: 25,
    };
    list.push_back(bolt.encode().into())?;

    let probe = Datum::Record(bolt.encode());
    println!("contains bolt: {}", list.contains(&probe));
    println!("{}", list.to_text(&renderer)?);

    println!("removed front: {:?}", list.pop_front()?);
    println!("removed back: {:?}", list.pop_back()?);
    println!(
        "removed after 9.81: {:?}",
        list.remove_after(&Datum::Double(9.81))?
    );
    println!(
        "removed before 100: {:?}",
        list.remove_before(&Datum::Integer(100))?
    );

    println!("{}", list.to_text(&renderer)?);
    println!("length: {}", list.len());

    list.clear();
    println!("cleared, empty: {}", list.is_empty());

    Ok(())
}
