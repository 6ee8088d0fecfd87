use serde::{Deserialize, Serialize};

/// Postal address embedded in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

impl Address {
    /// Single-line lookup text: `"{street}, {number}, {neighborhood}[, {complement}], {city}"`.
    ///
    /// Deterministic, so two formatted strings can be compared to decide
    /// whether an address changed.
    pub fn format(&self, city: &str) -> String {
        match self.complement.as_deref().filter(|c| !c.is_empty()) {
            Some(complement) => format!(
                "{}, {}, {}, {}, {}",
                self.street, self.number, self.neighborhood, complement, city
            ),
            None => format!(
                "{}, {}, {}, {}",
                self.street, self.number, self.neighborhood, city
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tambau(complement: Option<&str>) -> Address {
        Address {
            street: "Avenida Epitácio Pessoa".to_string(),
            number: "1200".to_string(),
            neighborhood: "Tambaú".to_string(),
            complement: complement.map(str::to_string),
        }
    }

    #[test]
    fn test_format_without_complement() {
        assert_eq!(
            tambau(None).format("João Pessoa"),
            "Avenida Epitácio Pessoa, 1200, Tambaú, João Pessoa"
        );
    }

    #[test]
    fn test_format_with_complement() {
        assert_eq!(
            tambau(Some("Sala 3")).format("João Pessoa"),
            "Avenida Epitácio Pessoa, 1200, Tambaú, Sala 3, João Pessoa"
        );
    }

    #[test]
    fn test_empty_complement_is_omitted() {
        assert_eq!(tambau(Some("")).format("João Pessoa"), tambau(None).format("João Pessoa"));
    }

    #[test]
    fn test_format_is_stable() {
        let address = tambau(Some("Bloco B"));
        assert_eq!(address.format("João Pessoa"), address.clone().format("João Pessoa"));
    }
}
