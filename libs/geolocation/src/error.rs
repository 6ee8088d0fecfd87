use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("As coordenadas do evento estão fora dos limites de {city}")]
    OutOfBounds { city: String },

    #[error("Endereço do evento não foi encontrado pelo serviço de geolocalização")]
    AddressNotResolved,

    #[error("Geocoding provider unavailable: {0}")]
    Unavailable(String),
}

pub type GeoResult<T> = Result<T, GeoError>;

/// Request URLs carry the access token, so it is stripped before formatting.
impl From<reqwest::Error> for GeoError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            GeoError::Unavailable(format!("timeout: {}", err))
        } else {
            GeoError::Unavailable(err.to_string())
        }
    }
}
