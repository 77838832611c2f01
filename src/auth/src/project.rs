// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Discover the default project.

use crate::credentials::{Credentials, Environment};

/// Returns the default project for `service`.
///
/// The project is taken from the first of these that is set:
/// - the `<SERVICE>_PROJECT` environment variable, e.g. `SPEECH_PROJECT`,
/// - `GOOGLE_CLOUD_PROJECT`,
/// - `GCLOUD_PROJECT`,
/// - the project associated with `credentials`.
pub fn default_project<E>(
    service: &str,
    env: &E,
    credentials: Option<&Credentials>,
) -> Option<String>
where
    E: Environment + ?Sized,
{
    let service_var = format!("{}_PROJECT", service.to_uppercase());
    [service_var.as_str(), "GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"]
        .into_iter()
        .find_map(|name| env.var(name))
        .or_else(|| credentials.and_then(Credentials::project_id).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::testing::*;
    use test_case::test_case;

    #[test_case(&[("SPEECH_PROJECT", "a"), ("GOOGLE_CLOUD_PROJECT", "b"), ("GCLOUD_PROJECT", "c")], "a")]
    #[test_case(&[("GOOGLE_CLOUD_PROJECT", "b"), ("GCLOUD_PROJECT", "c")], "b")]
    #[test_case(&[("GCLOUD_PROJECT", "c")], "c")]
    #[test_case(&[("VISION_PROJECT", "v")], "test-project-id")]
    fn precedence(vars: &[(&str, &str)], want: &str) -> anyhow::Result<()> {
        let env = vars
            .iter()
            .fold(FakeEnvironment::default(), |env, (k, v)| env.with_var(k, v));
        let credentials = Credentials::from_json(&service_account_json())?;
        let got = default_project("speech", &env, Some(&credentials));
        assert_eq!(got.as_deref(), Some(want));
        Ok(())
    }

    #[test]
    fn quota_project() -> anyhow::Result<()> {
        let credentials = Credentials::from_json(&authorized_user_json())?;
        let got = default_project("SPEECH", &FakeEnvironment::default(), Some(&credentials));
        assert_eq!(got.as_deref(), Some("test-quota-project"));
        Ok(())
    }

    #[test]
    fn none() {
        let env = FakeEnvironment::default();
        assert_eq!(default_project("SPEECH", &env, None), None);
        let anonymous = Credentials::anonymous();
        assert_eq!(default_project("SPEECH", &env, Some(&anonymous)), None);
    }
}
