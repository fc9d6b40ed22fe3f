use crate::model::ValueType;

/// The caller-owned variable an argument writes into.
///
/// Each variant borrows the variable mutably for the lifetime of the parser, so the
/// argument's [`ValueType`] is fixed by construction.
/// Typically built via `From`: `Storage::from(&mut value)`.
#[derive(Debug)]
pub enum Storage<'a> {
    /// An `i32` variable.
    Int(&'a mut i32),
    /// An `f32` variable.
    Float(&'a mut f32),
    /// A `bool` variable.
    Bool(&'a mut bool),
    /// A `String` variable.
    Str(&'a mut String),
}

impl<'a> Storage<'a> {
    /// The value type of the bound variable.
    pub fn value_type(&self) -> ValueType {
        match self {
            Storage::Int(_) => ValueType::Int32,
            Storage::Float(_) => ValueType::Float32,
            Storage::Bool(_) => ValueType::Bool,
            Storage::Str(_) => ValueType::String,
        }
    }
}

impl<'a> From<&'a mut i32> for Storage<'a> {
    fn from(value: &'a mut i32) -> Self {
        Storage::Int(value)
    }
}

impl<'a> From<&'a mut f32> for Storage<'a> {
    fn from(value: &'a mut f32) -> Self {
        Storage::Float(value)
    }
}

impl<'a> From<&'a mut bool> for Storage<'a> {
    fn from(value: &'a mut bool) -> Self {
        Storage::Bool(value)
    }
}

impl<'a> From<&'a mut String> for Storage<'a> {
    fn from(value: &'a mut String) -> Self {
        Storage::Str(value)
    }
}

/// The closed set of values a `Store` argument admits.
///
/// The kind must agree with the argument's [`Storage`]; this is checked at registration.
#[derive(Debug, Clone, PartialEq)]
pub enum Choices {
    /// Admissible `i32` values (exact match).
    Int(Vec<i32>),
    /// Admissible `f32` values (matched within a small epsilon).
    Float(Vec<f32>),
    /// Admissible `String` values (exact match).
    Str(Vec<String>),
}

impl Choices {
    pub(crate) fn value_type(&self) -> ValueType {
        match self {
            Choices::Int(_) => ValueType::Int32,
            Choices::Float(_) => ValueType::Float32,
            Choices::Str(_) => ValueType::String,
        }
    }

    /// The choices as display strings, in declaration order.
    pub(crate) fn descriptions(&self) -> Vec<String> {
        match self {
            Choices::Int(values) => values.iter().map(|v| v.to_string()).collect(),
            Choices::Float(values) => values.iter().map(|v| format!("{v:.3}")).collect(),
            Choices::Str(values) => values.iter().map(|v| format!("\"{v}\"")).collect(),
        }
    }
}

impl From<Vec<i32>> for Choices {
    fn from(values: Vec<i32>) -> Self {
        Choices::Int(values)
    }
}

impl<const N: usize> From<[i32; N]> for Choices {
    fn from(values: [i32; N]) -> Self {
        Choices::Int(values.to_vec())
    }
}

impl From<Vec<f32>> for Choices {
    fn from(values: Vec<f32>) -> Self {
        Choices::Float(values)
    }
}

impl<const N: usize> From<[f32; N]> for Choices {
    fn from(values: [f32; N]) -> Self {
        Choices::Float(values.to_vec())
    }
}

impl From<Vec<String>> for Choices {
    fn from(values: Vec<String>) -> Self {
        Choices::Str(values)
    }
}

impl From<Vec<&str>> for Choices {
    fn from(values: Vec<&str>) -> Self {
        Choices::Str(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Choices {
    fn from(values: [&str; N]) -> Self {
        Choices::Str(values.iter().map(|v| v.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_value_type() {
        let mut int: i32 = 0;
        let mut float: f32 = 0.0;
        let mut boolean: bool = false;
        let mut string: String = String::default();

        assert_eq!(Storage::from(&mut int).value_type(), ValueType::Int32);
        assert_eq!(Storage::from(&mut float).value_type(), ValueType::Float32);
        assert_eq!(Storage::from(&mut boolean).value_type(), ValueType::Bool);
        assert_eq!(Storage::from(&mut string).value_type(), ValueType::String);
    }

    #[test]
    fn choices_from() {
        assert_eq!(Choices::from([1, 2]), Choices::Int(vec![1, 2]));
        assert_eq!(Choices::from(vec![1.5f32]), Choices::Float(vec![1.5]));
        assert_eq!(
            Choices::from(["a", "b"]),
            Choices::Str(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(Choices::from([1.5f32]).value_type(), ValueType::Float32);
        assert_eq!(Choices::from(["a"]).value_type(), ValueType::String);
    }

    #[test]
    fn choices_descriptions() {
        assert_eq!(Choices::from([3, -1]).descriptions(), vec!["3", "-1"]);
        assert_eq!(
            Choices::from([54.5f32, 1.0]).descriptions(),
            vec!["54.500", "1.000"]
        );
        assert_eq!(
            Choices::from(["red", "blue"]).descriptions(),
            vec!["\"red\"", "\"blue\""]
        );
    }
}
