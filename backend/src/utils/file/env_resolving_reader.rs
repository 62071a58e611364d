use crate::utils::resolve_env_var;
use std::io::{BufRead, Read};

/// Replaces `${env:NAME}` placeholders line by line while reading.
pub struct EnvResolvingReader<R: BufRead> {
    inner: R,
    buffer: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> EnvResolvingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buffer: Vec::new(), pos: 0 }
    }

    fn fill_line(&mut self) -> std::io::Result<bool> {
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        self.buffer = resolve_env_var(&line).into_bytes();
        self.pos = 0;
        Ok(true)
    }
}

impl<R: BufRead> Read for EnvResolvingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.pos >= self.buffer.len() {
            if !self.fill_line()? {
                return Ok(0);
            }
        }
        let available = &self.buffer[self.pos..];
        let len = available.len().min(buf.len());
        buf[..len].copy_from_slice(&available[..len]);
        self.pos += len;
        Ok(len)
    }
}
