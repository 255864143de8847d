use{
    std::{
        fs::File,
        io::{Write, BufWriter},
        path::Path
    },
    serde_json::Value,
    super::*
};

/// Writes one line per simulated day:
/// `day healthy infected symptomatic`
pub struct CurveWriter<W: Write = BufWriter<File>>
{
    writer: W
}

impl CurveWriter
{
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self>
    {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CurveWriter<W>
{
    pub fn new(writer: W) -> Self
    {
        Self{writer}
    }

    pub fn write_header(&mut self, jsons: &[Value]) -> std::io::Result<()>
    {
        write_jsons(jsons, &mut self.writer)?;
        writeln!(self.writer, "#day healthy infected symptomatic")
    }

    pub fn write_day(&mut self, day: usize, counts: StateCounts) -> std::io::Result<()>
    {
        writeln!(
            self.writer,
            "{day} {} {} {}",
            counts.healthy,
            counts.infected,
            counts.symptomatic
        )
    }

    pub fn finish(mut self) -> std::io::Result<W>
    {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

pub fn write_jsons<W: Write>(jsons: &[Value], mut writer: W) -> std::io::Result<()>
{
    for j in jsons{
        write!(writer, "#")?;
        serde_json::to_writer(&mut writer, j)?;
        writeln!(writer)?;
    }
    Ok(())
}
