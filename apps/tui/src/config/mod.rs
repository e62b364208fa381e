mod settings;

pub use settings::{load_dotenv, AppConfig, DataSource};
