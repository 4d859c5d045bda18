pub type CliResult<T> = anyhow::Result<T>;
