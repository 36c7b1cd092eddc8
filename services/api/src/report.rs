use crate::infra::{evaluation_instant, parse_date, parse_yes_no};
use alumni_directory::config::AppConfig;
use alumni_directory::directory::{
    AlumniDirectory, DirectoryStatistics, FilterCriteria, PersonRecord, RosterFile,
};
use alumni_directory::error::AppError;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Free-text search across name, employer, education, location and skills
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Employer name substring
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Role title substring
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Field of study: computer, it, entc or management
    #[arg(long)]
    pub(crate) field_of_study: Option<String>,
    /// Only alumni whose second education entry is (yes) or is not (no) at the institute
    #[arg(long, value_parser = parse_yes_no)]
    pub(crate) further_studies: Option<bool>,
}

impl FilterArgs {
    pub(crate) fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: non_empty(&self.search),
            company: non_empty(&self.company),
            role: non_empty(&self.role),
            field_of_study: non_empty(&self.field_of_study),
            further_studies: self.further_studies,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Roster export to read (defaults to APP_ROSTER_PATH)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Evaluate graduation as of this date (YYYY-MM-DD, defaults to now)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
}

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// Roster export to read (defaults to APP_ROSTER_PATH)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Evaluate graduation as of this date (YYYY-MM-DD, defaults to now)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let ListArgs {
        roster,
        today,
        filters,
    } = args;

    let directory = load_directory(roster, today)?;
    let criteria = filters.criteria();
    let matches = directory.filter(&criteria);

    println!("Alumni directory");
    println!(
        "{} eligible of {} roster rows (evaluated {})",
        directory.alumni().len(),
        directory.roster_size(),
        directory.evaluated_at().date()
    );
    println!("Found {} alumni", matches.len());

    for record in &matches {
        println!();
        print!("{}", render_card(record));
    }

    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let directory = load_directory(args.roster, args.today)?;
    print!("{}", render_statistics(&directory.statistics()));
    Ok(())
}

fn load_directory(
    roster: Option<PathBuf>,
    today: Option<NaiveDate>,
) -> Result<AlumniDirectory, AppError> {
    let path = match roster {
        Some(path) => path,
        None => AppConfig::load()?.roster.path,
    };
    let source = RosterFile::new(path);
    Ok(AlumniDirectory::load(&source, evaluation_instant(today))?)
}

pub(crate) fn render_card(record: &PersonRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", record.full_name));
    if let Some(headline) = &record.headline {
        out.push_str(&format!("  {headline}\n"));
    }

    let position = record.current_company_position.as_deref().unwrap_or_default();
    let company = record.current_company.as_deref().unwrap_or_default();
    if !position.is_empty() || !company.is_empty() {
        out.push_str(&format!("  Role: {position} at {company}\n"));
    }

    out.push_str(&format!(
        "  Education: {} - {}\n",
        record.education_1.as_deref().unwrap_or_default(),
        record.education_degree_1.as_deref().unwrap_or_default()
    ));
    if let Some(second) = &record.education_2 {
        out.push_str(&format!(
            "             {} - {}\n",
            second,
            record.education_degree_2.as_deref().unwrap_or_default()
        ));
    }

    if let Some(location) = &record.location_name {
        out.push_str(&format!("  Location: {location}\n"));
    }
    if let Some(url) = &record.profile_url {
        out.push_str(&format!("  Profile: {url}\n"));
    }
    if let Some(email) = &record.email {
        out.push_str(&format!("  Email: mailto:{email}\n"));
    }
    out
}

pub(crate) fn render_statistics(stats: &DirectoryStatistics) -> String {
    let mut out = String::from("Statistics\n");
    out.push_str(&format!("- Total alumni: {}\n", stats.total_alumni));
    match stats.average_tenure_years {
        Some(years) => out.push_str(&format!("- Average experience: {years:.1} years\n")),
        None => out.push_str("- Average experience: n/a\n"),
    }
    out.push_str(&format!("- Unique companies: {}\n", stats.unique_employers));

    out.push_str("\nTop companies\n");
    for entry in &stats.top_employers {
        out.push_str(&format!("- {}: {}\n", entry.key, entry.count));
    }

    out.push_str("\nGraduation year trend\n");
    for entry in &stats.graduation_trend {
        out.push_str(&format!("- {}: {}\n", entry.key, entry.count));
    }

    out.push_str("\nAlumni by location\n");
    for entry in &stats.top_locations {
        out.push_str(&format!("- {}: {}\n", entry.key, entry.count));
    }

    out.push_str("\nRole distribution\n");
    for entry in &stats.role_distribution {
        out.push_str(&format!("- {}: {}\n", entry.label, entry.count));
    }
    out
}
