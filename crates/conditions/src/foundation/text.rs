//! String access for string conditions

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that may hold text.
///
/// `None` means the value is a null reference; string conditions treat its
/// length as zero.
pub trait Text {
    /// The text, or `None` for a null reference.
    fn text(&self) -> Option<&str>;
}

impl Text for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Text for Cow<'_, str> {
    fn text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: Text + ?Sized> Text for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text + ?Sized> Text for Box<T> {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text + ?Sized> Text for Rc<T> {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text + ?Sized> Text for Arc<T> {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text> Text for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_access() {
        assert_eq!("abc".text(), Some("abc"));
        assert_eq!(String::from("x").text(), Some("x"));
        assert_eq!(Some("y").text(), Some("y"));
        assert_eq!(None::<String>.text(), None);
        assert_eq!(Arc::<str>::from("z").text(), Some("z"));
    }
}
