pub mod pod_req;
