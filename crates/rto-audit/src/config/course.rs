use serde::Serialize;

const GENERIC_CODE: &str = "GENERIC";
const GENERIC_NAME: &str = "VET Training Providers";
const GENERIC_SITE_URL: &str = "https://rto-comparison.com.au";

/// Known qualifications and their display names.
const COURSE_METADATA: [(&str, &str); 5] = [
    ("CPP41419", "Certificate IV in Real Estate Practice"),
    ("BSB40520", "Certificate IV in Leadership and Management"),
    ("CHC43015", "Certificate IV in Ageing Support"),
    ("CHC33021", "Certificate III in Individual Support"),
    ("UEE30820", "Certificate III in Electrotechnology Electrician"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    Route,
    Subdomain,
    Standalone,
}

impl DeploymentMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "route" => Some(Self::Route),
            "subdomain" => Some(Self::Subdomain),
            "standalone" => Some(Self::Standalone),
            _ => None,
        }
    }
}

/// Course context for a deployment. Built once at startup and passed to
/// whichever component needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseConfig {
    pub course_code: String,
    pub course_name: String,
    pub site_url: String,
    pub deployment_mode: DeploymentMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl CourseConfig {
    pub fn detect(
        course_code: Option<&str>,
        site_url: Option<&str>,
        deployment_mode: Option<&str>,
        state: Option<&str>,
    ) -> Self {
        let state = state.map(str::to_string);

        if let (Some(code), Some(site_url)) = (course_code, site_url) {
            let code = code.trim().to_ascii_uppercase();
            return Self {
                course_name: course_name(&code).unwrap_or(&code).to_string(),
                course_code: code,
                site_url: site_url.to_string(),
                deployment_mode: deployment_mode
                    .and_then(DeploymentMode::parse)
                    .unwrap_or(DeploymentMode::Route),
                state,
            };
        }

        if let Some(site_url) = site_url {
            let hostname = hostname(site_url);
            if let Some(code) = course_code_from_domain(hostname) {
                let deployment_mode = if hostname.starts_with("compare.") {
                    DeploymentMode::Subdomain
                } else {
                    DeploymentMode::Route
                };
                return Self {
                    course_name: course_name(&code).unwrap_or(&code).to_string(),
                    course_code: code,
                    site_url: format!("https://{hostname}"),
                    deployment_mode,
                    state,
                };
            }
        }

        Self {
            course_code: GENERIC_CODE.to_string(),
            course_name: GENERIC_NAME.to_string(),
            site_url: site_url.unwrap_or(GENERIC_SITE_URL).to_string(),
            deployment_mode: DeploymentMode::Standalone,
            state,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.course_code == GENERIC_CODE
    }
}

fn course_name(code: &str) -> Option<&'static str> {
    COURSE_METADATA
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

fn hostname(site_url: &str) -> &str {
    let without_scheme = site_url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(site_url);
    without_scheme
        .split(['/', ':', '?', '#'])
        .next()
        .unwrap_or(without_scheme)
}

/// `cpp41419.com.au` and `compare.cpp41419.com.au` both resolve to CPP41419.
fn course_code_from_domain(hostname: &str) -> Option<String> {
    let cleaned = hostname.strip_prefix("compare.").unwrap_or(hostname);
    let candidate = cleaned.split('.').next()?.to_ascii_uppercase();

    if matches_course_pattern(&candidate) && course_name(&candidate).is_some() {
        Some(candidate)
    } else {
        None
    }
}

/// Three to six letters followed by exactly five digits.
fn matches_course_pattern(candidate: &str) -> bool {
    let letters = candidate
        .chars()
        .take_while(|ch| ch.is_ascii_uppercase())
        .count();
    let digits = &candidate[letters..];
    (3..=6).contains(&letters) && digits.len() == 5 && digits.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_code_without_metadata_uses_code_as_name() {
        let config = CourseConfig::detect(
            Some("abc12345"),
            Some("https://example.edu.au"),
            Some("standalone"),
            None,
        );
        assert_eq!(config.course_code, "ABC12345");
        assert_eq!(config.course_name, "ABC12345");
        assert_eq!(config.deployment_mode, DeploymentMode::Standalone);
    }

    #[test]
    fn detects_course_from_compare_subdomain() {
        let config =
            CourseConfig::detect(None, Some("https://compare.bsb40520.com.au/"), None, None);
        assert_eq!(config.course_code, "BSB40520");
        assert_eq!(config.deployment_mode, DeploymentMode::Subdomain);
        assert_eq!(config.site_url, "https://compare.bsb40520.com.au");
    }

    #[test]
    fn unknown_domain_falls_back_to_generic() {
        let config = CourseConfig::detect(None, Some("https://xyz99999.com.au"), None, Some("QLD"));
        assert!(config.is_generic());
        assert_eq!(config.course_name, "VET Training Providers");
        assert_eq!(config.site_url, "https://xyz99999.com.au");
        assert_eq!(config.deployment_mode, DeploymentMode::Standalone);
        assert_eq!(config.state.as_deref(), Some("QLD"));
    }

    #[test]
    fn generic_default_site_url() {
        let config = CourseConfig::detect(None, None, None, None);
        assert_eq!(config.site_url, "https://rto-comparison.com.au");
    }

    #[test]
    fn course_pattern_requires_letters_then_five_digits() {
        assert!(matches_course_pattern("CPP41419"));
        assert!(!matches_course_pattern("CP41419"));
        assert!(!matches_course_pattern("CPP4141"));
        assert!(!matches_course_pattern("CPPABC41419X"));
    }
}
