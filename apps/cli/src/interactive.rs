//! Interactive menu mode: a numbered loop over the six career operations,
//! prompting for inputs line by line.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;

use crate::agent::CareerAgent;
use crate::config::Config;
use crate::errors::AppError;
use crate::output;

pub async fn run(provider: Option<&str>, config: Config) -> Result<(), AppError> {
    println!();
    println!("{}", "Welcome to Beacon interactive mode!".bold().blue());
    println!("Resume analysis, career advice, job applications, and more.");

    let mut agent = CareerAgent::new(provider, config)?;

    loop {
        print_menu();
        let choice = prompt_line("\nWhat would you like to do? [1-6, q]")?;

        let result = match choice.as_str() {
            "q" | "Q" => {
                println!("Goodbye! Good luck with your career journey.");
                return Ok(());
            }
            "1" => analyze(&mut agent).await,
            "2" => advice(&mut agent).await,
            "3" => optimize(&mut agent).await,
            "4" => cover_letter(&mut agent).await,
            "5" => interview(&mut agent).await,
            "6" => skills(&mut agent).await,
            _ => {
                println!("Please choose 1-6 or q.");
                Ok(())
            }
        };

        // Keep the menu alive on failures; only a clean quit leaves the loop.
        if let Err(e) = result {
            output::print_error(&e.to_string());
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "Available commands".bold());
    println!("  1  Analyze resume");
    println!("  2  Get career advice");
    println!("  3  Optimize resume for a job");
    println!("  4  Generate cover letter");
    println!("  5  Interview preparation");
    println!("  6  Skill development");
    println!("  q  Quit");
}

async fn analyze(agent: &mut CareerAgent) -> Result<(), AppError> {
    let detailed = prompt_line("Detailed analysis? [Y/n]")?.to_lowercase() != "n";
    let bar = output::spinner("Analyzing resume...");
    let analysis = agent.analyze_resume(detailed).await;
    bar.finish_and_clear();
    let analysis = analysis?;
    output::print_report("Resume Analysis", &analysis);
    offer_save(agent, &analysis, "resume_analysis.md")
}

async fn advice(agent: &mut CareerAgent) -> Result<(), AppError> {
    let query = prompt_line("What career advice do you need?")?;
    let context = prompt_line("Any additional context? (optional)")?;
    let context = (!context.is_empty()).then_some(context);

    let bar = output::spinner("Generating career advice...");
    let advice = agent.career_advice(&query, context.as_deref()).await;
    bar.finish_and_clear();
    let advice = advice?;
    output::print_report("Career Advice", &advice);
    offer_save(agent, &advice, "career_advice.md")
}

async fn optimize(agent: &mut CareerAgent) -> Result<(), AppError> {
    let job_description = read_job_description()?;
    let bar = output::spinner("Optimizing resume...");
    let optimization = agent.optimize_for_job(&job_description).await;
    bar.finish_and_clear();
    let optimization = optimization?;
    output::print_report("Resume Optimization", &optimization);
    offer_save(agent, &optimization, "resume_optimization.md")
}

async fn cover_letter(agent: &mut CareerAgent) -> Result<(), AppError> {
    let company = prompt_line("Company name:")?;
    let job_description = read_job_description()?;
    let additional_info = prompt_line("Any additional info to include? (optional)")?;
    let additional_info = (!additional_info.is_empty()).then_some(additional_info);

    let bar = output::spinner("Generating cover letter...");
    let letter = agent
        .cover_letter(&job_description, &company, additional_info.as_deref())
        .await;
    bar.finish_and_clear();
    let letter = letter?;
    output::print_report("Cover Letter", &letter);
    let filename = format!("cover_letter_{}.md", company.replace(' ', "_"));
    offer_save(agent, &letter, &filename)
}

async fn interview(agent: &mut CareerAgent) -> Result<(), AppError> {
    let interview_type =
        prompt_line("Interview type [general/technical/behavioral/panel]:")?.to_lowercase();
    let interview_type = match interview_type.as_str() {
        "technical" | "behavioral" | "panel" => interview_type,
        _ => "general".to_string(),
    };
    let job_description = read_job_description()?;

    let bar = output::spinner("Preparing interview questions...");
    let prep = agent.interview_prep(&job_description, &interview_type).await;
    bar.finish_and_clear();
    let prep = prep?;
    output::print_report("Interview Preparation", &prep);
    let filename = format!("interview_prep_{interview_type}.md");
    offer_save(agent, &prep, &filename)
}

async fn skills(agent: &mut CareerAgent) -> Result<(), AppError> {
    let target_role = prompt_line("Target role or career direction (optional):")?;
    let target_role = (!target_role.is_empty()).then_some(target_role);

    let bar = output::spinner("Analyzing skill development opportunities...");
    let suggestions = agent.skill_suggestions(target_role.as_deref()).await;
    bar.finish_and_clear();
    let suggestions = suggestions?;
    output::print_report("Skill Development Suggestions", &suggestions);
    offer_save(agent, &suggestions, "skill_suggestions.md")
}

fn offer_save(agent: &CareerAgent, content: &str, filename: &str) -> Result<(), AppError> {
    if prompt_line("Save to file? [y/N]")?.to_lowercase() == "y" {
        output::print_saved(&agent.save_output(content, filename)?);
    }
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt} ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Reads a pasted job description, terminated by two consecutive blank
/// lines.
fn read_job_description() -> Result<String, AppError> {
    println!("Paste the job description (finish with two blank lines):");
    let stdin = std::io::stdin();
    let mut lines: Vec<String> = Vec::new();
    let mut blank_count = 0;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            blank_count += 1;
            if blank_count >= 2 {
                break;
            }
        } else {
            blank_count = 0;
        }
        lines.push(line);
    }

    let job_description = lines.join("\n").trim().to_string();
    if job_description.is_empty() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "no job description provided"
        )));
    }
    Ok(job_description)
}
