use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_database: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
        let db_port = env::var("DB_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3306);
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "root".into());
        let db_password = env::var("DB_PASSWORD").unwrap_or_default();
        let db_database = env::var("DB_DATABASE").unwrap_or_else(|_| "users_db".into());

        Ok(Self {
            api_port,
            db_host,
            db_port,
            db_user,
            db_password,
            db_database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test mutating the environment keeps the process-global env
    // changes out of any parallel test's view.
    #[test]
    fn from_env_reads_overrides_and_falls_back_to_defaults() {
        unsafe {
            env::set_var("API_PORT", "8080");
            env::set_var("DB_HOST", "db.internal");
            env::set_var("DB_PORT", "not-a-port");
            env::remove_var("DB_USER");
            env::remove_var("DB_PASSWORD");
            env::remove_var("DB_DATABASE");
        }

        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.api_port, 8080);
        assert_eq!(cfg.db_host, "db.internal");
        // unparseable port falls back
        assert_eq!(cfg.db_port, 3306);
        assert_eq!(cfg.db_user, "root");
        assert_eq!(cfg.db_password, "");
        assert_eq!(cfg.db_database, "users_db");

        unsafe {
            env::remove_var("API_PORT");
            env::remove_var("DB_HOST");
            env::remove_var("DB_PORT");
        }
    }
}
