use std::fmt::{self, Display};

/// Demonstration value: ordering always comes from key extractors,
/// never from the record itself, so there is no `Ord` impl here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub age: u32,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn default_age_is_zero() {
        let r = Record::with_name("sarah");
        assert_eq!(r.name, "sarah");
        assert_eq!(r.age, 0);
    }

    #[test]
    fn display_format() {
        let r = Record::new("john", 24);
        assert_eq!(r.to_string(), "john (24)");
    }
}
