use clap::{Args as ClapArgs, Parser, Subcommand};

/// Estimate how likely one course transfers in place of another.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CourseArgs {
    /// First course description
    #[clap(long = "description-1", allow_hyphen_values = true)]
    pub description_1: Option<String>,

    /// Second course description
    #[clap(long = "description-2", allow_hyphen_values = true)]
    pub description_2: Option<String>,

    /// First course title
    #[clap(long = "title-1", allow_hyphen_values = true)]
    pub title_1: Option<String>,

    /// Second course title
    #[clap(long = "title-2", allow_hyphen_values = true)]
    pub title_2: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate cli docs in markdown format
    #[cfg(feature = "markdown-docs")]
    #[clap(hide = true)]
    MarkdownDocs {},

    /// Compare two courses and print their transferability score
    Compare {
        #[clap(flatten)]
        courses: CourseArgs,

        /// Print the result as json
        #[clap(long, default_value = "false")]
        json: bool,

        /// Don't prompt for missing fields
        #[clap(long, default_value = "false")]
        no_prompt: bool,

        /// Embedding model to use instead of the configured one
        #[clap(short, long)]
        model: Option<String>,
    },
    /// Combine already-computed similarities without loading a model
    Score {
        /// Cosine similarity of the two descriptions, between -1 and 1
        #[clap(short, long, allow_hyphen_values = true)]
        description_similarity: f64,

        /// Cosine similarity of the two titles, between -1 and 1
        #[clap(short, long, allow_hyphen_values = true)]
        title_similarity: f64,

        /// Print the result as json
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// List supported embedding models
    Models {},
}
