//! Configuración central del servicio.
//! Carga variables de entorno (.env incluido) una sola vez y expone una
//! estructura inmutable (`CONFIG`). Todas las claves tienen valor por defecto;
//! un valor ilegible se ignora con un aviso y se usa el defecto.
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_IMAGE_WIDTH: u32 = 400;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Configuración global del servicio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dirección `host:puerto` donde escucha el servidor HTTP.
    pub bind: String,
    /// Calcular los descriptores de cada molécula en paralelo.
    pub parallel_descriptors: bool,
    /// Tamaño del lienzo SVG.
    pub image_width: u32,
    pub image_height: u32,
    /// Plazo máximo por petición, en milisegundos.
    pub request_timeout_ms: u64,
    /// Tamaño máximo aceptado para el cuerpo de una petición.
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { bind: DEFAULT_BIND.to_string(),
               parallel_descriptors: false,
               image_width: DEFAULT_IMAGE_WIDTH,
               image_height: DEFAULT_IMAGE_HEIGHT,
               request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
               max_body_bytes: DEFAULT_MAX_BODY_BYTES }
    }
}

fn parsed<T, F>(lookup: &F, key: &str, default: T) -> T
    where T: std::str::FromStr,
          F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                                           log::warn!("{key}='{raw}' no es válido; se usa el valor por defecto");
                                           default
                                       }),
    }
}

fn flag<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> bool {
    lookup(key).map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
               .unwrap_or(false)
}

impl AppConfig {
    /// Construye la configuración a partir de una función de búsqueda de
    /// claves (el entorno del proceso en producción, un mapa en tests).
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let d = Self::default();
        let bind = lookup("CHEMDESC_BIND").map(|v| v.trim().to_string())
                                          .filter(|v| !v.is_empty())
                                          .unwrap_or(d.bind);
        Self { bind,
               parallel_descriptors: flag(&lookup, "CHEMDESC_PARALLEL_DESCRIPTORS"),
               image_width: parsed(&lookup, "CHEMDESC_IMAGE_WIDTH", d.image_width),
               image_height: parsed(&lookup, "CHEMDESC_IMAGE_HEIGHT", d.image_height),
               request_timeout_ms: parsed(&lookup, "CHEMDESC_REQUEST_TIMEOUT_MS", d.request_timeout_ms),
               max_body_bytes: parsed(&lookup, "CHEMDESC_MAX_BODY_BYTES", d.max_body_bytes) }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    AppConfig::from_env()
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
        assert_eq!(AppConfig::default().request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn reads_every_key() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("CHEMDESC_BIND", "0.0.0.0:9000"),
                                                        ("CHEMDESC_PARALLEL_DESCRIPTORS", "true"),
                                                        ("CHEMDESC_IMAGE_WIDTH", "640"),
                                                        ("CHEMDESC_IMAGE_HEIGHT", " 480 "),
                                                        ("CHEMDESC_REQUEST_TIMEOUT_MS", "1500"),
                                                        ("CHEMDESC_MAX_BODY_BYTES", "1024")]));
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert!(cfg.parallel_descriptors);
        assert_eq!((cfg.image_width, cfg.image_height), (640, 480));
        assert_eq!(cfg.request_timeout(), Duration::from_millis(1500));
        assert_eq!(cfg.max_body_bytes, 1024);
    }

    #[test]
    fn unreadable_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("CHEMDESC_IMAGE_WIDTH", "ancho"),
                                                        ("CHEMDESC_PARALLEL_DESCRIPTORS", "nope"),
                                                        ("CHEMDESC_BIND", "  ")]));
        assert_eq!(cfg.image_width, DEFAULT_IMAGE_WIDTH);
        assert!(!cfg.parallel_descriptors);
        assert_eq!(cfg.bind, DEFAULT_BIND);
    }
}
