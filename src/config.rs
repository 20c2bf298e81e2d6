use std::env::var;

use dotenvy::dotenv;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub store_url: String,
    pub store_service_key: String,
    pub app_base_url: String,
    pub job_secret: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            store_url: var("SUPABASE_URL")
                .map_err(|_| "An error occured while getting SUPABASE_URL env param")?
                .trim_end_matches('/')
                .to_string(),
            store_service_key: var("SUPABASE_SERVICE_ROLE_KEY")
                .map_err(|_| "An error occured while getting SUPABASE_SERVICE_ROLE_KEY env param")?,
            app_base_url: var("APP_BASE_URL")
                .map_err(|_| "An error occured while getting APP_BASE_URL env param")?
                .trim_end_matches('/')
                .to_string(),
            job_secret: var("JOB_SECRET")
                .map_err(|_| "An error occured while getting JOB_SECRET env param")?,
        })
    }
}
