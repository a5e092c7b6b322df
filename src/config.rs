use chrono::Offset;

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: String,
    pub logger_timezone: chrono::FixedOffset,
    pub log_filter: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: "http://localhost:8000/predict".to_string(),
            logger_timezone: local_offset(),
            log_filter: "info".to_string(),
            window_size: [720.0, 820.0],
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
