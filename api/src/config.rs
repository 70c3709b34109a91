use secrecy::SecretString;

/// Connection and routing settings for the Supabase project.
///
/// Buckets and prefixes are plain values threaded to whoever needs them;
/// there is no process-wide mutable routing state.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    pub anon_key: SecretString,
    /// Storage bucket for published mini-cabinet pages.
    pub public_cabinets_bucket: String,
    /// Path prefix for cabinet objects inside the bucket.
    pub client_cabinets_prefix: String,
    /// Storage bucket for published doula profile pages.
    pub public_profiles_bucket: String,
    /// Path prefix for profile objects inside the bucket.
    pub public_profiles_prefix: String,
    /// Storage bucket for recommendation attachments.
    pub attachments_bucket: String,
}

impl SupabaseConfig {
    pub fn new(url: String, anon_key: SecretString) -> Self {
        Self {
            url,
            anon_key,
            public_cabinets_bucket: "public_cabinets".to_string(),
            client_cabinets_prefix: "c".to_string(),
            public_profiles_bucket: "public_profiles".to_string(),
            public_profiles_prefix: "p".to_string(),
            attachments_bucket: "client_files".to_string(),
        }
    }

    pub fn from_env() -> Self {
        use std::env::var;

        Self::new(
            var("SUPABASE_URL").unwrap(),
            var("SUPABASE_ANON_KEY").unwrap().into(),
        )
    }

    /// Public URL of a stored object. Pure function of the config.
    pub fn public_object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{path}",
            self.url.trim_end_matches('/')
        )
    }

    /// Base URL of the directory containing cabinet token folders; join
    /// with `<token>/index.html` to reach a published page.
    pub fn client_cabinet_public_base_url(&self) -> String {
        self.public_object_url(
            &self.public_cabinets_bucket,
            &self.client_cabinets_prefix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SupabaseConfig {
        SupabaseConfig::new(
            "https://xyz.supabase.co/".to_string(),
            "anon".to_string().into(),
        )
    }

    #[test]
    fn public_object_url_shape() {
        assert_eq!(
            config().public_object_url("public_cabinets", "c/abc/index.html"),
            "https://xyz.supabase.co/storage/v1/object/public/public_cabinets/c/abc/index.html"
        );
    }

    #[test]
    fn cabinet_base_url_points_at_the_prefix_directory() {
        assert_eq!(
            config().client_cabinet_public_base_url(),
            "https://xyz.supabase.co/storage/v1/object/public/public_cabinets/c"
        );
    }
}
