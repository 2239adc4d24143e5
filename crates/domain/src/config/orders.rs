use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrdersConfig {
    /// Sales product code sent with every pre-create request.
    #[serde(default = "default_product_code")]
    pub product_code: String,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            product_code: default_product_code(),
        }
    }
}

fn default_product_code() -> String {
    "FACE_TO_FACE_PAYMENT".to_string()
}
