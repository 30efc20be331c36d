use clap::{ArgAction, Args, Parser, Subcommand};
use kemono_anim_tool::types::TransformType;

/// Tools for merging and editing kemono animation files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arg {
    #[arg(short = 'R', long, global = true)]
    /// YAML file overriding the built-in bone tables
    pub rules: Option<String>,
    #[arg(global = true, action = ArgAction::SetTrue, short, long)]
    /// Print backtrace on error
    pub backtrace: bool,
    #[command(subcommand)]
    /// Command
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Animation file to merge into
    pub primary: Option<String>,
    /// Animation file to take bones from
    pub secondary: Option<String>,
    #[arg(short, long)]
    /// Output file
    pub output: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Animation file to edit
    pub input: Option<String>,
    #[arg(short, long)]
    /// Output file
    pub output: Option<String>,
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    #[command(flatten)]
    pub edit: EditArgs,
    #[arg(short = 'n', long)]
    /// CSV bone name table with Old_Name and New_Name columns
    pub name_table: Option<String>,
    #[arg(short = 'r', long, action = ArgAction::SetTrue)]
    /// Rename from new names back to old names
    pub reverse: bool,
}

#[derive(Subcommand, Debug)]
/// Commands
pub enum Command {
    /// Copy upper body bones from a second animation file
    CopyUpperBody(MergeArgs),
    /// Copy every bone from a second animation file
    MergeAll(MergeArgs),
    /// Negate rotationY of the upper foot bones
    NegateRotation(EditArgs),
    /// Remove bad bones from every keyframe
    RemoveBadBones(EditArgs),
    /// Rename bones
    RenameBones(RenameArgs),
}

impl Command {
    pub fn transform_type(&self) -> TransformType {
        match self {
            Command::CopyUpperBody(_) => TransformType::CopyUpperBody,
            Command::MergeAll(_) => TransformType::MergeAll,
            Command::NegateRotation(_) => TransformType::NegateRotation,
            Command::RemoveBadBones(_) => TransformType::RemoveBadBones,
            Command::RenameBones(_) => TransformType::RenameBones,
        }
    }

    /// Input files given on the command line, `None` where the default applies.
    pub fn inputs(&self) -> Vec<Option<&str>> {
        match self {
            Command::CopyUpperBody(a) | Command::MergeAll(a) => {
                vec![a.primary.as_deref(), a.secondary.as_deref()]
            }
            Command::NegateRotation(a) | Command::RemoveBadBones(a) => vec![a.input.as_deref()],
            Command::RenameBones(a) => vec![a.edit.input.as_deref()],
        }
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Command::CopyUpperBody(a) | Command::MergeAll(a) => a.output.as_deref(),
            Command::NegateRotation(a) | Command::RemoveBadBones(a) => a.output.as_deref(),
            Command::RenameBones(a) => a.edit.output.as_deref(),
        }
    }
}

pub fn parse_args() -> Arg {
    Arg::parse()
}
