use crate::{
    factory::seed::{additional_pool_size, additional_profiles, seed_profiles},
    model::profile::Profile,
};

fn describe(profile: &Profile) -> String {
    format!(
        "{} {} <{}> - {}, {}",
        profile.first_name,
        profile.last_name,
        profile.email,
        profile.title,
        profile.location.as_deref().unwrap_or("unknown location")
    )
}

/// One line per demo profile followed by the pool used for test data.
pub fn list_seed_profiles() -> Vec<String> {
    let mut lines = vec!["seed profiles:".to_string()];
    lines.extend(seed_profiles().iter().map(|x| format!("  {}", describe(x))));
    lines.push("additional test profiles:".to_string());
    lines.extend(
        additional_profiles(additional_pool_size())
            .iter()
            .map(|x| format!("  {}", describe(x))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::list_seed_profiles;

    #[test]
    fn test_list_seed_profiles() {
        let lines = list_seed_profiles();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "seed profiles:");
        assert_eq!(
            lines[1],
            "  Marie Dubois <marie.dubois@email.com> - Full-Stack Developer, Paris, France"
        );
        assert_eq!(lines[9], "additional test profiles:");
        assert!(lines[10].starts_with("  Pierre Durand <pierre.durand@email.com>"));
    }
}
