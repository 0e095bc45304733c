//! Human-readable list rendering.
//!
//! The list renders scalar elements itself but cannot know the shape of
//! opaque `Record` payloads, so [`List::to_text`] delegates each record to a
//! caller-supplied [`RenderRecord`] and brackets its output in braces. The
//! rest of the shape is fixed: a `[START]` marker, one rendered element per
//! node front to back, a ` <-> ` separator, and an `[END]` marker.

use super::core::List;
use super::error::ListError;
use crate::datum::Datum;

/// Renders an opaque record payload for display.
///
/// Implemented by the caller for its record type; any `Fn(&[u8]) -> String`
/// closure works through the blanket impl.
pub trait RenderRecord {
    /// Formats one record payload.
    fn render(&self, payload: &[u8]) -> String;
}

impl<F> RenderRecord for F
where
    F: Fn(&[u8]) -> String,
{
    fn render(&self, payload: &[u8]) -> String {
        self(payload)
    }
}

impl List {
    /// Renders the whole list front to back.
    ///
    /// Scalar and text elements render as `[value]`; each `Record` element
    /// renders as `{...}` around the renderer's output. The renderer is
    /// invoked once per record, in list order, and never for other kinds.
    ///
    /// # Errors
    ///
    /// Fails `Empty` if the list has no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use catena::datum::Datum;
    /// use catena::list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(Datum::Character('A')).unwrap();
    /// list.push_back(Datum::Integer(100)).unwrap();
    ///
    /// let text = list.to_text(&|_: &[u8]| String::new()).unwrap();
    /// assert_eq!(text, "[START] <-> [A] <-> [100] <-> [END]");
    /// ```
    pub fn to_text<R: RenderRecord>(&self, renderer: &R) -> Result<String, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let mut out = String::from("[START] <-> ");
        for datum in self.iter() {
            let piece = match datum {
                Datum::Integer(n) => format!("[{}]", n),
                Datum::Double(n) => format!("[{}]", n),
                Datum::Character(c) => format!("[{}]", c),
                Datum::Text(s) => format!("[{}]", s),
                Datum::Record(payload) => format!("{{{}}}", renderer.render(payload)),
            };
            out.push_str(&piece);
            out.push_str(" <-> ");
        }
        out.push_str("[END]");
        Ok(out)
    }
}
