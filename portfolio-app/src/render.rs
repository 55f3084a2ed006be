use crate::content::{
    self, EXPERIENCE, HIGHLIGHTS, MILESTONES, PROFILE, SPOKEN_LANGUAGES, STATS,
};
use colored::Colorize;
use portfolio_lib::{FeedState, Repo};

fn heading(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

pub fn home() {
    heading(&format!("Hey, I'm {}", PROFILE.name));
    println!("{}", PROFILE.tagline.bright_magenta());
    println!("{}", PROFILE.blurb);
    println!();

    for stat in &STATS {
        println!("  {} {}", stat.value.bold().cyan(), stat.label);
    }
    println!();

    for highlight in &HIGHLIGHTS {
        println!("  {} - {}", highlight.title.bold(), highlight.description);
    }
    println!();
    println!("Resume: {}", PROFILE.resume_path.underline());
}

pub fn about() {
    heading("About");
    println!("{}", PROFILE.blurb);
    println!();
    println!("{}", "Languages".bold());
    for language in &SPOKEN_LANGUAGES {
        println!("  {} ({})", language.name, language.level.dimmed());
    }
}

pub fn experience() {
    heading("Experience");
    for entry in &EXPERIENCE {
        println!(
            "{} @ {} ({})",
            entry.title.bold().yellow(),
            entry.company,
            entry.period.dimmed(),
        );
        println!("  {} | {}", entry.kind, entry.location);
        println!("  {}", entry.description);
        println!("  {}", entry.skills.join(", ").cyan());
        println!();
    }

    println!("{}", "Milestones".bold());
    for milestone in &MILESTONES {
        println!("  {} - {}", milestone.title.bold(), milestone.description);
    }
}

pub fn featured_projects(category: &str) {
    heading("Featured Projects");
    let projects = content::projects_in(category);
    if projects.is_empty() {
        println!("No featured projects in the {category} category.");
        return;
    }

    for project in projects {
        println!(
            "{} {}",
            project.title.bold().yellow(),
            format!("[{}]", project.category).dimmed(),
        );
        println!("  {}", project.description);
        println!("  {}", project.technologies.join(", ").cyan());
        if let Some(github) = project.github {
            println!("  Code: {}", github.underline());
        }
        if let Some(live) = project.live {
            println!("  Live: {}", live.underline());
        }
        println!();
    }
}

pub fn feed_placeholder() {
    heading("GitHub Repositories");
    println!("{}", "Loading repositories...".dimmed());
    println!();
}

pub fn repository_feed(state: &FeedState, account: &str) {
    match state {
        FeedState::Loading => {}
        FeedState::Loaded(repos) if repos.is_empty() => {
            println!(
                "No featured repositories found. Repositories need either 1+ stars \
                 or a description to be featured."
            );
        }
        FeedState::Loaded(repos) => {
            for repo in repos {
                repo_card(repo);
            }
            println!(
                "({} repos) All repositories: {}",
                repos.len(),
                format!("https://github.com/{account}").underline(),
            );
        }
        FeedState::Failed(_) => {
            println!("{}", "Failed to load GitHub repositories".red());
            println!("Run the command again to retry.");
        }
    }
}

fn repo_card(repo: &Repo) {
    println!(
        "{} {}",
        repo.name.bold().yellow(),
        format!("[{}]", repo.html_url).dimmed(),
    );

    let description = repo
        .description
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("Featured repository");
    println!("  {description}");

    let updated = repo
        .updated_at
        .split('T')
        .next()
        .unwrap_or(repo.updated_at.as_str());
    let mut stats = Vec::new();
    if let Some(language) = repo.language.as_deref() {
        stats.push(language.color(content::language_color(language)).to_string());
    }
    stats.push(format!("{} stars", repo.stargazers_count));
    stats.push(format!("{} forks", repo.forks_count));
    stats.push(format!("updated {updated}"));
    println!("  {}", stats.join(" | "));

    if !repo.topics.is_empty() {
        let mut topics = repo
            .topics
            .iter()
            .take(3)
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>();
        if repo.topics.len() > 3 {
            topics.push(format!("+{}", repo.topics.len() - 3));
        }
        println!("  {}", topics.join(" ").dimmed());
    }
    println!();
}

pub fn contact() {
    heading("Contact");
    println!("Email:    {}", format!("mailto:{}", PROFILE.email).underline());
    println!("GitHub:   {}", PROFILE.github_url.underline());
    println!("LinkedIn: {}", PROFILE.linkedin_url.underline());
    println!("Resume:   {}", PROFILE.resume_path.underline());
}
