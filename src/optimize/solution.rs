use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Solution {
    /// 1-based position of the machine in the input
    pub machine: usize,
    pub presses: Vec<u64>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lights: Option<u64>,
}

impl Solution {
    pub fn new(machine: usize, presses: Vec<u64>, lights: Option<u64>) -> Self {
        Solution {
            machine,
            total: presses.iter().sum(),
            presses,
            lights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_lights() {
        let sol = Solution::new(1, vec![1, 3, 0, 3, 1, 2], None);
        assert_eq!(sol.total, 10);
        assert_eq!(
            serde_json::to_string(&sol).unwrap(),
            r#"{"machine":1,"presses":[1,3,0,3,1,2],"total":10}"#
        );
    }

    #[test]
    fn serializes_lights_when_present() {
        let sol = Solution::new(2, vec![], Some(3));
        assert_eq!(
            serde_json::to_string(&sol).unwrap(),
            r#"{"machine":2,"presses":[],"total":0,"lights":3}"#
        );
    }
}
