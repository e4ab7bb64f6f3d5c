//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use std::env;
use std::path::PathBuf;

use chemengine::EmbedOptions;
use once_cell::sync::Lazy;

pub const ENV_JAVA: &str = "CHEM_AUTOTUTOR_JAVA";
pub const ENV_OPSIN_JAR: &str = "CHEM_AUTOTUTOR_OPSIN_JAR";
pub const ENV_TEMPLATES: &str = "CHEM_AUTOTUTOR_TEMPLATES";
pub const ENV_UFF_MAX_ITERS: &str = "CHEM_AUTOTUTOR_UFF_MAX_ITERS";
pub const ENV_EMBED_SEED: &str = "CHEM_AUTOTUTOR_EMBED_SEED";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Traductor de nombres (OPSIN).
    pub translator: TranslatorConfig,
    /// Directorio con plantillas que reemplazan a las embebidas.
    pub templates_dir: Option<PathBuf>,
    /// Embedding 3D y minimización.
    pub embed: EmbedOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Programa que ejecuta el jar.
    pub java: PathBuf,
    pub opsin_jar: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { translator: TranslatorConfig { java: PathBuf::from("java"),
                                              opsin_jar: PathBuf::from("opsin.jar") },
               templates_dir: None,
               embed: EmbedOptions::default() }
    }
}

impl AppConfig {
    /// Construye la configuración desde el entorno (tras cargar `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Variables vacías o con valores inválidos caen al default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let max_iters = match get(ENV_UFF_MAX_ITERS).map(|v| v.parse::<u32>()) {
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                log::warn!("{ENV_UFF_MAX_ITERS} inválido, se usa {}", defaults.embed.max_iters);
                defaults.embed.max_iters
            }
            None => defaults.embed.max_iters,
        };
        let random_seed = get(ENV_EMBED_SEED).and_then(|v| match v.parse::<u32>() {
                                                 Ok(seed) => Some(seed),
                                                 Err(_) => {
                                                     log::warn!("{ENV_EMBED_SEED} inválido, se ignora");
                                                     None
                                                 }
                                             });

        Self { translator: TranslatorConfig { java: get(ENV_JAVA).map(PathBuf::from)
                                                                 .unwrap_or(defaults.translator.java),
                                              opsin_jar: get(ENV_OPSIN_JAR).map(PathBuf::from)
                                                                           .unwrap_or(defaults.translator.opsin_jar) },
               templates_dir: get(ENV_TEMPLATES).map(PathBuf::from),
               embed: EmbedOptions { max_iters, random_seed } }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
        assert_eq!(AppConfig::default().embed.max_iters, 200);
    }

    #[test]
    fn environment_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_JAVA, "/usr/lib/jvm/bin/java"),
                                                  (ENV_OPSIN_JAR, "/opt/opsin-2.8.0.jar"),
                                                  (ENV_TEMPLATES, "my-templates"),
                                                  (ENV_UFF_MAX_ITERS, "500"),
                                                  (ENV_EMBED_SEED, "42")]));
        assert_eq!(cfg.translator.java, PathBuf::from("/usr/lib/jvm/bin/java"));
        assert_eq!(cfg.translator.opsin_jar, PathBuf::from("/opt/opsin-2.8.0.jar"));
        assert_eq!(cfg.templates_dir, Some(PathBuf::from("my-templates")));
        assert_eq!(cfg.embed, EmbedOptions { max_iters: 500, random_seed: Some(42) });
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_UFF_MAX_ITERS, "many"), (ENV_EMBED_SEED, "-1"), (ENV_JAVA, "  ")]));
        assert_eq!(cfg.embed, EmbedOptions::default());
        assert_eq!(cfg.translator.java, PathBuf::from("java"));
    }
}
