use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "symptom-recommender";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn default_log_filter() -> String {
    "info,symptom_recommender=debug".to_string()
}

/// Directory holding the reference-table CSVs.
/// `RECOMMENDER_DATA_DIR`, default `./data`.
pub fn data_dir() -> PathBuf {
    std::env::var_os("RECOMMENDER_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Path to the serialized classifier artifact.
/// `RECOMMENDER_MODEL_PATH`, default `<data_dir>/svc_model.json`.
pub fn model_path() -> PathBuf {
    std::env::var_os("RECOMMENDER_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("svc_model.json"))
}

/// Optional ONNX classifier artifact (`RECOMMENDER_ONNX_MODEL`).
/// Only consulted when the `onnx-model` feature is compiled in.
pub fn onnx_model_path() -> Option<PathBuf> {
    std::env::var_os("RECOMMENDER_ONNX_MODEL").map(PathBuf::from)
}

/// Listen address. `RECOMMENDER_ADDR`, default `0.0.0.0:5001`
/// (the port the original deployment used).
pub fn bind_addr() -> Result<SocketAddr, std::net::AddrParseError> {
    match std::env::var("RECOMMENDER_ADDR") {
        Ok(raw) => raw.parse(),
        Err(_) => Ok(SocketAddr::from(([0, 0, 0, 0], 5001))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_uses_port_5001() {
        let addr = bind_addr().unwrap();
        assert_eq!(addr.port(), 5001);
    }

    #[test]
    fn model_path_lives_under_data_dir() {
        let path = model_path();
        assert!(path.starts_with(data_dir()));
        assert!(path.ends_with("svc_model.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
