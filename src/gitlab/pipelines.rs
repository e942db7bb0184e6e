use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::types::{JobAction, PipelineAction, ScheduleAction};
use super::GitLabClient;

impl GitLabClient {
    /// Trigger a pipeline for a branch or tag.
    pub async fn create_pipeline(&self, project_id: u64, git_ref: &str) -> Result<Value> {
        self.api
            .post(
                &format!("/projects/{}/pipeline", project_id),
                &json!({ "ref": git_ref }),
            )
            .await
    }

    pub async fn read_pipeline(&self, project_id: u64, pipeline_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/pipelines/{}", project_id, pipeline_id))
            .await
    }

    pub async fn update_pipeline(
        &self,
        project_id: u64,
        pipeline_id: u64,
        action: PipelineAction,
    ) -> Result<Value> {
        self.api
            .post_empty(&format!(
                "/projects/{}/pipelines/{}/{}",
                project_id,
                pipeline_id,
                action.as_str()
            ))
            .await
    }

    pub async fn delete_pipeline(&self, project_id: u64, pipeline_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/projects/{}/pipelines/{}", project_id, pipeline_id))
            .await
    }

    pub async fn list_pipeline_jobs(&self, project_id: u64, pipeline_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/pipelines/{}/jobs", project_id, pipeline_id))
            .await
    }

    pub async fn list_pipeline_schedules(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/pipeline_schedules", project_id))
            .await
    }

    pub async fn manage_pipeline_jobs(
        &self,
        project_id: u64,
        job_id: u64,
        action: JobAction,
    ) -> Result<()> {
        let request = self.api.request(
            Method::POST,
            &format!("/projects/{}/jobs/{}/{}", project_id, job_id, action.as_str()),
        );

        self.api.execute_unit(request).await
    }

    pub async fn manage_pipeline_schedules(
        &self,
        project_id: u64,
        schedule_id: u64,
        action: ScheduleAction,
    ) -> Result<()> {
        let request = self.api.request(
            Method::POST,
            &format!(
                "/projects/{}/pipeline_schedules/{}/{}",
                project_id,
                schedule_id,
                action.as_str()
            ),
        );

        self.api.execute_unit(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_pipeline_ref() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v4/projects/12/pipeline")
                    .json_body(json!({"ref": "main"}));
                then.status(201).json_body(json!({"id": 500, "status": "pending"}));
            })
            .await;

        let pipeline = client(&server.base_url())
            .create_pipeline(12, "main")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(pipeline["status"], "pending");
    }

    #[tokio::test]
    async fn test_update_pipeline_action_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v4/projects/12/pipelines/500/cancel");
                then.status(200).json_body(json!({"id": 500, "status": "canceled"}));
            })
            .await;

        let pipeline = client(&server.base_url())
            .update_pipeline(12, 500, PipelineAction::Cancel)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(pipeline["status"], "canceled");
    }

    #[tokio::test]
    async fn test_manage_pipeline_jobs_and_schedules() {
        let server = MockServer::start_async().await;
        let job = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v4/projects/12/jobs/77/retry");
                then.status(201).json_body(json!({"id": 78}));
            })
            .await;
        let schedule = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v4/projects/12/pipeline_schedules/5/take_ownership");
                then.status(200).json_body(json!({"id": 5}));
            })
            .await;

        let client = client(&server.base_url());
        client
            .manage_pipeline_jobs(12, 77, JobAction::Retry)
            .await
            .unwrap();
        client
            .manage_pipeline_schedules(12, 5, ScheduleAction::TakeOwnership)
            .await
            .unwrap();

        job.assert_async().await;
        schedule.assert_async().await;
    }
}
