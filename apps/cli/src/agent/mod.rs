//! The career agent: owns the selected provider, the configuration, and the
//! parsed résumé, and exposes one method per assistance operation.

pub mod prompts;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{create_provider, ChatMessage, ChatProvider, GenerationOptions};
use crate::parser::{self, ParsedDocument};

pub struct CareerAgent {
    provider: Box<dyn ChatProvider>,
    config: Config,
    resume: Option<ParsedDocument>,
}

impl CareerAgent {
    /// Builds an agent with the named provider (falling back to the config
    /// default) and makes sure the output directory exists.
    pub fn new(provider_name: Option<&str>, config: Config) -> Result<Self, AppError> {
        let name = provider_name.unwrap_or(&config.default_provider).to_string();
        let provider = create_provider(&name, &config)?;
        fs::create_dir_all(&config.output_dir)?;
        info!(provider = provider.name(), "career agent initialized");
        Ok(CareerAgent {
            provider,
            config,
            resume: None,
        })
    }

    /// Parses the résumé at `path`, or the configured default path.
    pub fn load_resume(&mut self, path: Option<&Path>) -> Result<&ParsedDocument, AppError> {
        let path = path.unwrap_or(&self.config.resume_path);
        info!(path = %path.display(), "parsing resume");
        let doc = parser::parse(path)?;
        Ok(self.resume.insert(doc))
    }

    /// The loaded résumé, loading the configured default lazily.
    fn resume(&mut self) -> Result<&ParsedDocument, AppError> {
        if self.resume.is_none() {
            self.load_resume(None)?;
        }
        Ok(self.resume.as_ref().expect("resume just loaded"))
    }

    pub async fn analyze_resume(&mut self, detailed: bool) -> Result<String, AppError> {
        let prompt = prompts::render_analysis(self.resume()?, detailed);
        self.complete(prompts::ANALYSIS_SYSTEM, prompt).await
    }

    pub async fn career_advice(
        &mut self,
        query: &str,
        context: Option<&str>,
    ) -> Result<String, AppError> {
        let prompt = prompts::render_advice(self.resume()?, query, context);
        self.complete(prompts::ADVICE_SYSTEM, prompt).await
    }

    pub async fn optimize_for_job(&mut self, job_description: &str) -> Result<String, AppError> {
        let prompt = prompts::render_optimization(self.resume()?, job_description);
        self.complete(prompts::OPTIMIZATION_SYSTEM, prompt).await
    }

    pub async fn cover_letter(
        &mut self,
        job_description: &str,
        company: &str,
        additional_info: Option<&str>,
    ) -> Result<String, AppError> {
        let prompt =
            prompts::render_cover_letter(self.resume()?, job_description, company, additional_info);
        self.complete(prompts::COVER_LETTER_SYSTEM, prompt).await
    }

    pub async fn interview_prep(
        &mut self,
        job_description: &str,
        interview_type: &str,
    ) -> Result<String, AppError> {
        let prompt = prompts::render_interview(self.resume()?, job_description, interview_type);
        self.complete(prompts::INTERVIEW_SYSTEM, prompt).await
    }

    pub async fn skill_suggestions(
        &mut self,
        target_role: Option<&str>,
    ) -> Result<String, AppError> {
        let prompt = prompts::render_skills(self.resume()?, target_role);
        self.complete(prompts::SKILLS_SYSTEM, prompt).await
    }

    /// Writes `content` under the output directory as
    /// `<timestamp>_<filename>` and returns the full path.
    pub fn save_output(&self, content: &str, filename: &str) -> Result<PathBuf, AppError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.config.output_dir.join(format!("{timestamp}_{filename}"));
        fs::write(&path, content)?;
        info!(path = %path.display(), "output saved");
        Ok(path)
    }

    async fn complete(&self, system: &str, prompt: String) -> Result<String, AppError> {
        let messages = [ChatMessage::system(system), ChatMessage::user(prompt)];
        let options = GenerationOptions {
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        Ok(self.provider.generate_response(&messages, &options).await?)
    }
}
