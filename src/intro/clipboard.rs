//! Clipboard image extraction.
//!
//! The extractor itself is a pure scan over abstract clipboard items; the
//! `SystemClipboard` source at the bottom adapts the OS clipboard (via
//! `arboard`) into those items, re-encoding raw RGBA as PNG.

use std::io::Cursor;

use super::error::ClipboardError;

/// One entry on the clipboard: a set of available content types plus a
/// type-indexed payload accessor.
pub trait ClipboardItem {
    fn content_types(&self) -> &[String];

    /// Payload for one of the advertised content types, if it can be produced.
    fn payload(&self, content_type: &str) -> Option<Vec<u8>>;
}

/// An image payload pulled off the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Return the payload of the first item advertising any `image/*` type.
///
/// Scans in order and short-circuits on the first image-typed item: later
/// items are never inspected, even when the winning item fails to produce its
/// payload. No image anywhere is a normal `None`, not an error.
pub fn extract_image<I: ClipboardItem>(items: &[I]) -> Option<ImagePayload> {
    for item in items {
        if let Some(t) = item
            .content_types()
            .iter()
            .find(|t| t.starts_with("image/"))
        {
            return item.payload(t).map(|bytes| ImagePayload {
                content_type: t.clone(),
                bytes,
            });
        }
    }
    None
}

/// Source of clipboard items. The screen reads through this trait so tests
/// can script clipboard contents and permission failures.
pub trait ClipboardSource {
    type Item: ClipboardItem;

    fn read_items(&mut self) -> Result<Vec<Self::Item>, ClipboardError>;
}

/// Concrete item produced by [`SystemClipboard`].
pub struct SystemClipboardItem {
    types: Vec<String>,
    bytes: Vec<u8>,
}

impl ClipboardItem for SystemClipboardItem {
    fn content_types(&self) -> &[String] {
        &self.types
    }

    fn payload(&self, content_type: &str) -> Option<Vec<u8>> {
        if self.types.iter().any(|t| t == content_type) {
            Some(self.bytes.clone())
        } else {
            None
        }
    }
}

/// Live OS clipboard. Opened per read; holding the handle across the whole
/// screen lifetime keeps the clipboard locked on some platforms.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| SystemClipboard { inner })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    /// Capability probe, done once at startup to decide whether the paste
    /// affordance is a button or plain text.
    pub fn supported() -> bool {
        arboard::Clipboard::new().is_ok()
    }
}

impl ClipboardSource for SystemClipboard {
    type Item = SystemClipboardItem;

    fn read_items(&mut self) -> Result<Vec<SystemClipboardItem>, ClipboardError> {
        match self.inner.get_image() {
            Ok(img) => {
                let bytes = encode_png(&img)?;
                Ok(vec![SystemClipboardItem {
                    types: vec!["image/png".to_string()],
                    bytes,
                }])
            }
            // Clipboard readable but holds no image: an empty item list, the
            // extractor turns that into a normal "no image" outcome.
            Err(arboard::Error::ContentNotAvailable) => Ok(Vec::new()),
            Err(arboard::Error::ClipboardNotSupported) => {
                Err(ClipboardError::Unavailable("not supported".to_string()))
            }
            Err(e) => Err(ClipboardError::Read(e.to_string())),
        }
    }
}

fn encode_png(img: &arboard::ImageData<'_>) -> Result<Vec<u8>, ClipboardError> {
    let rgba = image::RgbaImage::from_raw(
        img.width as u32,
        img.height as u32,
        img.bytes.clone().into_owned(),
    )
    .ok_or_else(|| ClipboardError::Read("malformed RGBA data".to_string()))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| ClipboardError::Read(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeItem {
        types: Vec<String>,
        bytes: Option<Vec<u8>>,
        asked: Cell<u32>,
    }

    impl FakeItem {
        fn new(types: &[&str], bytes: Option<&[u8]>) -> Self {
            FakeItem {
                types: types.iter().map(|t| t.to_string()).collect(),
                bytes: bytes.map(|b| b.to_vec()),
                asked: Cell::new(0),
            }
        }
    }

    impl ClipboardItem for FakeItem {
        fn content_types(&self) -> &[String] {
            &self.types
        }

        fn payload(&self, _content_type: &str) -> Option<Vec<u8>> {
            self.asked.set(self.asked.get() + 1);
            self.bytes.clone()
        }
    }

    #[test]
    fn first_image_item_wins() {
        let items = vec![
            FakeItem::new(&["text/plain"], Some(b"nope")),
            FakeItem::new(&["text/html", "image/png"], Some(b"png-bytes")),
            FakeItem::new(&["image/jpeg"], Some(b"jpeg-bytes")),
        ];
        let payload = extract_image(&items).unwrap();
        assert_eq!(payload.content_type, "image/png");
        assert_eq!(payload.bytes, b"png-bytes");
        // The later image item was never asked for its payload.
        assert_eq!(items[2].asked.get(), 0);
        // The text item was never asked either.
        assert_eq!(items[0].asked.get(), 0);
    }

    #[test]
    fn no_image_is_none() {
        let items = vec![
            FakeItem::new(&["text/plain"], Some(b"a")),
            FakeItem::new(&["text/html"], Some(b"b")),
        ];
        assert!(extract_image(&items).is_none());
        assert!(extract_image::<FakeItem>(&[]).is_none());
    }

    #[test]
    fn failed_payload_short_circuits() {
        // The first image-typed item produces nothing; the scan still stops
        // there instead of falling through to the next image item.
        let items = vec![
            FakeItem::new(&["image/png"], None),
            FakeItem::new(&["image/jpeg"], Some(b"later")),
        ];
        assert!(extract_image(&items).is_none());
        assert_eq!(items[1].asked.get(), 0);
    }
}
