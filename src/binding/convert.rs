//! Text converters for [`bind_converted`](super::bind_converted).

/// Two-way conversion between a value and its text form.
///
/// `from_text` returns `None` for text that does not describe a value.
pub trait Converter<T> {
    fn to_text(&self, value: &T) -> String;
    fn from_text(&self, text: &str) -> Option<T>;
}

/// Whole numbers as decimal text. Surrounding whitespace is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerConverter;

impl Converter<i64> for IntegerConverter {
    fn to_text(&self, value: &i64) -> String {
        value.to_string()
    }

    fn from_text(&self, text: &str) -> Option<i64> {
        text.trim().parse().ok()
    }
}

/// Floating-point numbers as decimal text.
///
/// Non-finite values never parse, so `"NaN"` or `"inf"` typed into a field
/// leave the bound value alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleConverter;

impl Converter<f64> for DoubleConverter {
    fn to_text(&self, value: &f64) -> String {
        value.to_string()
    }

    fn from_text(&self, text: &str) -> Option<f64> {
        text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl<T, F, G> Converter<T> for (F, G)
where
    F: Fn(&T) -> String,
    G: Fn(&str) -> Option<T>,
{
    fn to_text(&self, value: &T) -> String {
        (self.0)(value)
    }

    fn from_text(&self, text: &str) -> Option<T> {
        (self.1)(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_text() {
        let conv = IntegerConverter;
        assert_eq!(conv.to_text(&-42), "-42");
        assert_eq!(conv.from_text(" 17 "), Some(17));
        assert_eq!(conv.from_text("1.5"), None);
        assert_eq!(conv.from_text(""), None);
    }

    #[test]
    fn double_text() {
        let conv = DoubleConverter;
        assert_eq!(conv.to_text(&2.5), "2.5");
        assert_eq!(conv.from_text("3"), Some(3.0));
        assert_eq!(conv.from_text("NaN"), None);
        assert_eq!(conv.from_text("abc"), None);
    }

    #[test]
    fn closure_pair() {
        let yes_no = (
            |v: &bool| if *v { "yes".to_string() } else { "no".to_string() },
            |s: &str| match s {
                "yes" => Some(true),
                "no" => Some(false),
                _ => None,
            },
        );
        assert_eq!(yes_no.to_text(&true), "yes");
        assert_eq!(yes_no.from_text("no"), Some(false));
        assert_eq!(yes_no.from_text("maybe"), None);
    }
}
