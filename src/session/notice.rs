//! User-visible notice texts.

use crate::error::SessionError;

pub const LOCATION_UNSUPPORTED: &str = "Tu dispositivo no permite acceder a la ubicación.";
pub const LOCATION_ACQUIRING: &str = "Obteniendo ubicación... (aceptá el permiso si te lo pide)";
pub const LOCATION_GRANTED: &str = "Ubicación registrada.";
pub const LOCATION_FAILED: &str = "No pudimos obtener tu ubicación. Permitila y volvé a intentar.";
pub const MISSING_NAME_OR_AGE: &str = "Completá nombre y edad para continuar.";
pub const LOCATION_REQUIRED: &str = "Activá la ubicación para encontrar amigas cerca.";

pub fn friend_request_sent(name: &str) -> String {
    format!("Solicitud de amistad enviada a {name}.")
}

pub fn for_error(error: &SessionError) -> &'static str {
    match error {
        SessionError::MissingNameOrAge => MISSING_NAME_OR_AGE,
        SessionError::LocationNotGranted => LOCATION_REQUIRED,
        SessionError::InvalidTransition { .. } | SessionError::UnknownCandidate(_) => "",
    }
}
