#[derive(Debug, Clone, Copy)]
pub enum Workload {
    /// Repeated little records, as a protocol codec would write them
    Records(usize),
    Literal(&'static [u8]),
}

impl Workload {
    pub fn fill(&self, out: &mut [u8]) -> usize {
        use Workload::*;
        match self {
            Records(count) => {
                let len = (*count * 7).min(out.len());
                for (i, byte) in out[..len].iter_mut().enumerate() {
                    *byte = (i % 251) as u8;
                }
                len
            }
            Literal(data) => {
                let len = data.len().min(out.len());
                out[..len].copy_from_slice(&data[..len]);
                len
            }
        }
    }
}
