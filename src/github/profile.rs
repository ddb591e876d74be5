use super::{FetchState, GithubApi, Profile};

/// Fetches `user`'s profile. Returns `None` without touching the network
/// when `user` is blank.
pub async fn load_profile<A: GithubApi>(api: &A, user: &str) -> Option<FetchState<Option<Profile>>> {
    let user = user.trim();
    if user.is_empty() {
        return None;
    }
    let state = match api.profile(user).await {
        Ok(profile) => FetchState::ready(Some(profile)),
        Err(e) => {
            log::error!("failed to fetch profile for {user}: {e}");
            FetchState::failed(None, &e)
        }
    };
    Some(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{
        testing::{profile_fixture, FakeApi},
        FetchError,
    };

    #[tokio::test]
    async fn test_success_clears_error() {
        let api = FakeApi::new().with_profile(Ok(profile_fixture()));
        let state = load_profile(&api, "al7arthy").await.expect("should fetch");

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.data, Some(profile_fixture()));
    }

    #[tokio::test]
    async fn test_failure_drops_profile() {
        let api = FakeApi::new().with_profile(Err(FetchError::Status(404)));
        let state = load_profile(&api, "nobody").await.expect("should fetch");

        assert!(!state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error.as_deref(), Some("GitHub API error: 404"));
    }

    #[tokio::test]
    async fn test_settles_to_exactly_one_outcome() {
        let outcomes = [
            Ok(profile_fixture()),
            Err(FetchError::Network("connection reset".to_string())),
            Err(FetchError::Parse("expected value at line 1".to_string())),
        ];
        for outcome in outcomes {
            let api = FakeApi::new().with_profile(outcome);
            let state = load_profile(&api, "al7arthy").await.expect("should fetch");
            assert_ne!(state.data.is_some(), state.error.is_some());
        }
    }

    #[tokio::test]
    async fn test_blank_user_is_skipped() {
        let api = FakeApi::new().with_profile(Ok(profile_fixture()));
        assert!(load_profile(&api, "").await.is_none());
        assert!(load_profile(&api, "   ").await.is_none());
        assert_eq!(api.calls.get(), 0);
    }
}
