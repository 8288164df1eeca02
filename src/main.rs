use std::{env, fs, path::PathBuf, time::Instant};

use anyhow::{bail, Context};
use serde::Serialize;
use skill_match::{
    Confidence, Explanation, JobPosting, Recommender, RecommenderConfig, DefaultTFIDFEngine,
};
use tracing_subscriber::EnvFilter;

/// One line of output: the ranked result joined back with its posting.
#[derive(Debug, Serialize)]
struct Recommendation<'a> {
    id: u64,
    title: &'a str,
    company: &'a str,
    required_skills: String,
    similarity_score: f64,
    match_percentage: u8,
    confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<Explanation>,
}

#[derive(Debug, Default)]
struct Args {
    skills: Option<String>,
    jobs: Option<PathBuf>,
    top: Option<usize>,
    config: Option<PathBuf>,
    explain: bool,
    matches_only: bool,
}

fn print_usage() {
    eprintln!(
        "usage: skill-match --skills \"<comma separated skills>\" --jobs <jobs.json> \
         [--top N] [--config <file.toml>] [--explain] [--matches-only]"
    );
    eprintln!("  --skills TEXT    : the user's skills, e.g. \"Python, Django, REST API\"");
    eprintln!("  --jobs FILE      : JSON array of {{id, title, company?, required_skills}}");
    eprintln!("  --top N          : number of results (overrides config top_n)");
    eprintln!("  --config FILE    : TOML config (default: ./skill-match.toml if present)");
    eprintln!("  --explain        : attach matching / missing skills to each result");
    eprintln!("  --matches-only   : drop results with a zero score");
    eprintln!("  RUST_LOG         : log filter, logs go to stderr");
}

/// `Ok(None)` means help was requested.
fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = env::args().skip(1);
    let mut parsed = Args::default();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--skills" => {
                parsed.skills = Some(args.next().context("--skills requires a value")?);
            }
            "--jobs" => {
                parsed.jobs = Some(args.next().context("--jobs requires a path")?.into());
            }
            "--top" => {
                let v = args.next().context("--top requires a number")?;
                match v.parse::<usize>() {
                    Ok(n) if n > 0 => parsed.top = Some(n),
                    _ => bail!("--top needs a positive integer, got {v:?}"),
                }
            }
            "--config" => {
                parsed.config = Some(args.next().context("--config requires a path")?.into());
            }
            "--explain" => parsed.explain = true,
            "--matches-only" => parsed.matches_only = true,
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(Some(parsed))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Rank the active postings in `jobs` and join each hit back with its posting.
fn recommend<'a>(
    recommender: &Recommender,
    skills: &str,
    jobs: &'a [JobPosting],
    explain: bool,
    matches_only: bool,
) -> Vec<Recommendation<'a>> {
    let active: Vec<&JobPosting> = jobs.iter().filter(|job| job.is_active).collect();
    if active.len() < jobs.len() {
        tracing::debug!(skipped = jobs.len() - active.len(), "skipping inactive postings");
    }
    // rank by position so postings sharing an id stay distinct
    let candidates: Vec<(usize, &str)> = active
        .iter()
        .enumerate()
        .map(|(i, job)| (i, job.required_skills.as_str()))
        .collect();

    recommender
        .rank(skills, &candidates)
        .into_iter()
        .filter(|hit| !matches_only || hit.is_match())
        .map(|hit| {
            let job = active[hit.candidate_id];
            Recommendation {
                id: job.id,
                title: &job.title,
                company: &job.company,
                required_skills: job.skills_display(),
                similarity_score: hit.similarity_score,
                match_percentage: hit.match_percentage,
                confidence: hit.confidence,
                explanation: explain.then(|| recommender.explain(skills, &job.required_skills)),
            }
        })
        .collect()
}

fn run(args: Args) -> anyhow::Result<()> {
    let program_start = Instant::now();
    let skills = args.skills.context("--skills is required")?;
    let jobs_path = args.jobs.context("--jobs is required")?;

    let mut config = match &args.config {
        Some(path) => RecommenderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RecommenderConfig::load().context("loading config")?,
    };
    if let Some(top) = args.top {
        config.top_n = top;
    }

    let raw = fs::read_to_string(&jobs_path)
        .with_context(|| format!("reading {}", jobs_path.display()))?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", jobs_path.display()))?;
    tracing::info!(jobs = jobs.len(), path = %jobs_path.display(), "loaded job postings");

    let recommender = Recommender::<f64, DefaultTFIDFEngine>::new(config)?;
    let recommendations = recommend(&recommender, &skills, &jobs, args.explain, args.matches_only);

    println!("{}", serde_json::to_string_pretty(&recommendations)?);
    tracing::info!(
        returned = recommendations.len(),
        elapsed_ms = program_start.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    match parse_args() {
        Ok(Some(args)) => run(args),
        Ok(None) => {
            print_usage();
            Ok(())
        }
        Err(err) => {
            print_usage();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, skills: &str, is_active: bool) -> JobPosting {
        JobPosting {
            id,
            title: format!("Job {id}"),
            company: "Acme".to_string(),
            required_skills: skills.to_string(),
            is_active,
        }
    }

    fn board() -> Vec<JobPosting> {
        vec![
            job(1, "Python, Django, PostgreSQL", true),
            job(2, "Java, Spring", true),
            job(3, "Python, Django, REST API", false),
            job(4, "Python, Flask", true),
        ]
    }

    #[test]
    fn inactive_postings_are_never_recommended() {
        let jobs = board();
        let out = recommend(&Recommender::default(), "Python, Django, REST API", &jobs, false, false);
        let ids: Vec<u64> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4, 2]);
        assert!(out.iter().all(|r| r.explanation.is_none()));
    }

    #[test]
    fn matches_only_drops_zero_scores() {
        let jobs = board();
        let out = recommend(&Recommender::default(), "Python, Django, REST API", &jobs, false, true);
        let ids: Vec<u64> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(out.iter().all(|r| r.similarity_score > 0.0));
    }

    #[test]
    fn explain_attaches_skill_overlap() {
        let jobs = board();
        let out = recommend(&Recommender::default(), "Python, Django, REST API", &jobs, true, true);
        let first = out[0].explanation.as_ref().unwrap();
        assert_eq!(first.match_count, 2);
        assert_eq!(first.total_required, 3);
        assert!(first.missing_skills.contains("postgresql"));
        assert_eq!(out[0].required_skills, "Python, Django, PostgreSQL");
    }

    #[test]
    fn duplicate_ids_stay_distinct() {
        let jobs = vec![job(7, "Rust", true), job(7, "Go, Rust", true)];
        let out = recommend(&Recommender::default(), "Rust", &jobs, false, false);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].required_skills, "Rust");
        assert_eq!(out[1].required_skills, "Go, Rust");
    }
}
