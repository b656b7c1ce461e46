/// Log filter in `tracing_subscriber::EnvFilter` syntax; overrides `-v`.
pub const LOG_ENV: &str = "WXR_IMPORT_LOG";
/// Config file path used when `--config` is not given.
pub const CONFIG_ENV: &str = "WXR_IMPORT_CONFIG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}
