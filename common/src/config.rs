pub struct Config {
    /// Hides the banner printed on startup.
    pub no_banner: bool,
    /// `1` drops banner and headers, `2` keeps only the sorted result.
    pub quiet: u8,
    /// Prints the partitions after every selection pass.
    pub steps: bool,
}
